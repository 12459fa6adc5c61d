//! Metadata element types describing source tables and join shapes

/// A selected source column: name plus the engine type name emitted in DDL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub sql_type: String,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

/// Constraint kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
}

/// A primary-key or unique-constraint definition on a source table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSpec {
    pub name: String,
    pub kind: ConstraintKind,
    /// Member columns, in key order
    pub columns: Vec<String>,
}

/// A source table: model-qualified name plus ordered columns and constraints
#[derive(Debug, Clone)]
pub struct TableDescriptor {
    /// Owning model (schema) name
    pub model: String,
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    pub constraints: Vec<ConstraintSpec>,
}

impl TableDescriptor {
    /// Model-qualified name without quoting (e.g. `model.orders`)
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.model, self.name)
    }

    /// The primary key, if the table declares one
    pub fn primary_key(&self) -> Option<&ConstraintSpec> {
        self.constraints
            .iter()
            .find(|c| c.kind == ConstraintKind::PrimaryKey)
    }

    /// The first unique constraint, if any
    pub fn first_unique_constraint(&self) -> Option<&ConstraintSpec> {
        self.constraints
            .iter()
            .find(|c| c.kind == ConstraintKind::Unique)
    }
}

/// Join type for two-source views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    #[default]
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

impl JoinType {
    /// The SQL join keyword emitted in the FROM clause
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::LeftOuter => "LEFT OUTER JOIN",
            JoinType::RightOuter => "RIGHT OUTER JOIN",
            JoinType::FullOuter => "FULL OUTER JOIN",
        }
    }

    /// Map a join-type string to a variant. Unrecognized values fall back
    /// to INNER rather than failing the build.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "LEFT_OUTER" | "LEFT OUTER" | "LEFT" => JoinType::LeftOuter,
            "RIGHT_OUTER" | "RIGHT OUTER" | "RIGHT" => JoinType::RightOuter,
            "FULL_OUTER" | "FULL OUTER" | "FULL" => JoinType::FullOuter,
            _ => JoinType::Inner,
        }
    }
}

/// Keyword combining consecutive join predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineKeyword {
    #[default]
    And,
    Or,
}

impl CombineKeyword {
    pub fn keyword(&self) -> &'static str {
        match self {
            CombineKeyword::And => "AND",
            CombineKeyword::Or => "OR",
        }
    }
}

/// One ON-clause predicate: `<leftAlias>.<left> <op> <rightAlias>.<right>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinPredicate {
    pub left_column: String,
    pub right_column: String,
    pub operator: String,
    /// Combines this predicate with the previous one (ignored on the first)
    pub combine: CombineKeyword,
}

/// Join description for a two-source view
#[derive(Debug, Clone)]
pub struct JoinSpec {
    pub left_alias: String,
    pub right_alias: String,
    pub join_type: JoinType,
    pub predicates: Vec<JoinPredicate>,
}

impl Default for JoinSpec {
    fn default() -> Self {
        Self {
            left_alias: "A".to_string(),
            right_alias: "B".to_string(),
            join_type: JoinType::Inner,
            predicates: Vec::new(),
        }
    }
}
