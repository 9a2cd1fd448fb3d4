//! Per-attribute match criteria.
//!
//! A [`Criterion`] constrains one attribute of one entity kind. Filters are
//! structs of criteria, one field per attribute; an entity matches a filter
//! when every criterion matches (AND across attributes), and a
//! [`Criterion::OneOf`] matches when the attribute equals any listed value
//! (OR within one attribute).

/// A constraint on a single attribute value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Criterion<T> {
    /// No constraint.
    #[default]
    Any,
    /// The attribute must equal this value.
    Equals(T),
    /// The attribute must equal one of these values.
    OneOf(Vec<T>),
}

impl<T: PartialEq> Criterion<T> {
    /// Returns true if this criterion places no constraint.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Tests a present attribute value.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Equals(expected) => expected == value,
            Self::OneOf(options) => options.contains(value),
        }
    }

    /// Tests an optional attribute. A missing attribute only matches [`Criterion::Any`].
    #[must_use]
    pub fn matches_opt(&self, value: Option<&T>) -> bool {
        match value {
            Some(value) => self.matches(value),
            None => self.is_any(),
        }
    }

    /// Tests a set-valued attribute: true if any member matches.
    #[must_use]
    pub fn matches_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.is_any() || values.into_iter().any(|v| self.matches(v))
    }
}

impl<T> From<T> for Criterion<T> {
    fn from(value: T) -> Self {
        Self::Equals(value)
    }
}

impl<T> From<Vec<T>> for Criterion<T> {
    fn from(values: Vec<T>) -> Self {
        Self::OneOf(values)
    }
}

impl From<&str> for Criterion<String> {
    fn from(value: &str) -> Self {
        Self::Equals(value.to_string())
    }
}
