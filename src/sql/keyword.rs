//! SQL keyword model used by the tokenizer and the clause-oriented formatter.
//!
//! This module defines the fixed keyword set the highlighter recognizes. It
//! covers the common DDL/DML/clause/aggregate vocabulary (~60 words) and is
//! deliberately closed: an unknown word is simply an identifier, never an
//! error. Extend only when an editing surface needs a new word highlighted.
//!
//! Design notes:
//! - Keywords are matched case‑insensitively via `from_lower` using a
//!   pre‑lower‑cased string slice; matching is whole-word because the
//!   tokenizer only calls it on complete identifier runs.
//! - `as_str` provides a canonical lowercase representation (useful for
//!   display or debugging).
//! - Multi-word clauses (`GROUP BY`, `LEFT JOIN`) are represented by their
//!   component words; the formatter reassembles phrases on its own.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
    And,
    Or,
    Not,
    In,
    Is,
    Null,
    Like,
    Between,
    Exists,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Create,
    Alter,
    Drop,
    Table,
    View,
    Index,
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
    As,
    Group,
    By,
    Order,
    Having,
    Distinct,
    Union,
    All,
    Limit,
    Offset,
    Top,
    Case,
    When,
    Then,
    Else,
    End,
    With,
    Count,
    Sum,
    Avg,
    Min,
    Max,
    Cast,
    Coalesce,
    Asc,
    Desc,
    Except,
    Intersect,
}

impl Keyword {
    /// Words that may open a major clause line in formatted output.
    ///
    /// The formatter indents every continuation line that does not start
    /// with one of these.
    pub const CLAUSE_STARTERS: [Self; 16] = [
        Keyword::Select,
        Keyword::From,
        Keyword::Where,
        Keyword::And,
        Keyword::Or,
        Keyword::Group,
        Keyword::Order,
        Keyword::Having,
        Keyword::Join,
        Keyword::Inner,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Cross,
        Keyword::Limit,
        Keyword::Union,
    ];

    /// Attempt to classify a *lower‑cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    ///
    /// NOTE: The caller is responsible for lower‑casing the input. This avoids
    /// allocating new strings for each token; `to_ascii_lowercase` is typically
    /// performed once per identifier lexeme outside this function.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "where" => Where,
            "and" => And,
            "or" => Or,
            "not" => Not,
            "in" => In,
            "is" => Is,
            "null" => Null,
            "like" => Like,
            "between" => Between,
            "exists" => Exists,
            "insert" => Insert,
            "into" => Into,
            "values" => Values,
            "update" => Update,
            "set" => Set,
            "delete" => Delete,
            "create" => Create,
            "alter" => Alter,
            "drop" => Drop,
            "table" => Table,
            "view" => View,
            "index" => Index,
            "join" => Join,
            "inner" => Inner,
            "left" => Left,
            "right" => Right,
            "full" => Full,
            "outer" => Outer,
            "cross" => Cross,
            "on" => On,
            "as" => As,
            "group" => Group,
            "by" => By,
            "order" => Order,
            "having" => Having,
            "distinct" => Distinct,
            "union" => Union,
            "all" => All,
            "limit" => Limit,
            "offset" => Offset,
            "top" => Top,
            "case" => Case,
            "when" => When,
            "then" => Then,
            "else" => Else,
            "end" => End,
            "with" => With,
            "count" => Count,
            "sum" => Sum,
            "avg" => Avg,
            "min" => Min,
            "max" => Max,
            "cast" => Cast,
            "coalesce" => Coalesce,
            "asc" => Asc,
            "desc" => Desc,
            "except" => Except,
            "intersect" => Intersect,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Where => "where",
            And => "and",
            Or => "or",
            Not => "not",
            In => "in",
            Is => "is",
            Null => "null",
            Like => "like",
            Between => "between",
            Exists => "exists",
            Insert => "insert",
            Into => "into",
            Values => "values",
            Update => "update",
            Set => "set",
            Delete => "delete",
            Create => "create",
            Alter => "alter",
            Drop => "drop",
            Table => "table",
            View => "view",
            Index => "index",
            Join => "join",
            Inner => "inner",
            Left => "left",
            Right => "right",
            Full => "full",
            Outer => "outer",
            Cross => "cross",
            On => "on",
            As => "as",
            Group => "group",
            By => "by",
            Order => "order",
            Having => "having",
            Distinct => "distinct",
            Union => "union",
            All => "all",
            Limit => "limit",
            Offset => "offset",
            Top => "top",
            Case => "case",
            When => "when",
            Then => "then",
            Else => "else",
            End => "end",
            With => "with",
            Count => "count",
            Sum => "sum",
            Avg => "avg",
            Min => "min",
            Max => "max",
            Cast => "cast",
            Coalesce => "coalesce",
            Asc => "asc",
            Desc => "desc",
            Except => "except",
            Intersect => "intersect",
        }
    }

    /// True if a *lower-cased* word opens a major clause line.
    pub fn starts_clause(word: &str) -> bool {
        Self::from_lower(word).is_some_and(|kw| Self::CLAUSE_STARTERS.contains(&kw))
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
