//! Parameterized query plans
//!
//! [`property_search`] turns a [`SearchFilter`] into SQL text plus positional
//! bind values. Fragments that carry a placeholder are pushed together with
//! their value, and the `$N` index is taken from the parameter list at push
//! time, so the Nth placeholder always names the Nth parameter.
//!
//! Price and rating placeholders carry a `::numeric` cast. Form input binds
//! as text, and the cast lets PostgreSQL convert `"50"` while still rejecting
//! `"cheap"` at execution.
//!
//! Building a plan never touches the database and never fails.

use std::fmt;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::models::{BindValue, Limit, SearchFilter};

const PROPERTY_SEARCH_BASE: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE 1 = 1";

/// SQL text with its ordered bind parameters
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    sql: String,
    params: Vec<BindValue>,
}

impl QueryPlan {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }

    /// Prepare the plan for execution, binding parameters in order.
    pub fn query_as<'q, O>(&'q self) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        self.params
            .iter()
            .fold(sqlx::query_as::<Postgres, O>(&self.sql), |query, param| match param {
                BindValue::Integer(n) => query.bind(*n),
                BindValue::Float(n) => query.bind(*n),
                BindValue::Text(s) => query.bind(s.as_str()),
            })
    }
}

/// Renders the SQL followed by one `-- $N = value` line per parameter.
impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sql)?;
        for (i, param) in self.params.iter().enumerate() {
            writeln!(f, "-- ${} = {}", i + 1, param)?;
        }
        Ok(())
    }
}

/// Appends clauses line by line; placeholders are numbered from the bound values.
#[derive(Debug)]
struct PlanBuilder {
    sql: String,
    params: Vec<BindValue>,
}

impl PlanBuilder {
    fn new(base: &str) -> Self {
        Self {
            sql: base.to_owned(),
            params: Vec::new(),
        }
    }

    fn push(&mut self, clause: &str) -> &mut Self {
        self.sql.push('\n');
        self.sql.push_str(clause);
        self
    }

    /// Append `clause $N`, where N is the position of `value`.
    fn push_bind(&mut self, clause: &str, value: impl Into<BindValue>) -> &mut Self {
        let n = self.bind(value);
        self.push(&format!("{} ${}", clause, n))
    }

    /// Append `clause $N::numeric`.
    fn push_numeric(&mut self, clause: &str, value: impl Into<BindValue>) -> &mut Self {
        let n = self.bind(value);
        self.push(&format!("{} ${}::numeric", clause, n))
    }

    fn bind(&mut self, value: impl Into<BindValue>) -> usize {
        self.params.push(value.into());
        self.params.len()
    }

    fn finish(mut self) -> QueryPlan {
        self.sql.push(';');
        QueryPlan {
            sql: self.sql,
            params: self.params,
        }
    }
}

/// Build the property search query.
///
/// Predicates are appended in a fixed order: city, minimum price, maximum
/// price. Price bounds are inclusive and apply before grouping. The rating
/// threshold compares the per-property average, so it goes in `HAVING`.
/// Price and rating values are compared as `numeric` whatever their kind.
/// Results are ordered by nightly cost, and the limit is always the last
/// parameter.
///
/// # Example
/// ```
/// use lightbnb_db::{property_search, BindValue, Limit, SearchFilter};
///
/// let filter = SearchFilter { city: Some("van".into()), ..Default::default() };
/// let plan = property_search(&filter, Limit::default());
///
/// assert!(plan.sql().contains("AND properties.city LIKE $1"));
/// assert_eq!(plan.params()[0], BindValue::Text("%van%".into()));
/// assert_eq!(plan.params()[1], BindValue::Integer(10));
/// ```
pub fn property_search(filter: &SearchFilter, limit: Limit) -> QueryPlan {
    let mut plan = PlanBuilder::new(PROPERTY_SEARCH_BASE);

    if let Some(city) = &filter.city {
        plan.push_bind("AND properties.city LIKE", format!("%{}%", city));
    }
    if let Some(min) = &filter.minimum_price_per_night {
        plan.push_numeric("AND properties.cost_per_night >=", min.clone());
    }
    if let Some(max) = &filter.maximum_price_per_night {
        plan.push_numeric("AND properties.cost_per_night <=", max.clone());
    }

    plan.push("GROUP BY properties.id");

    if let Some(rating) = &filter.minimum_rating {
        plan.push_numeric("HAVING avg(property_reviews.rating) >=", rating.clone());
    }

    plan.push("ORDER BY properties.cost_per_night")
        .push_bind("LIMIT", limit.get());

    plan.finish()
}
