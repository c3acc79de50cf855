use thiserror::Error;

/// Default error type carried by observables in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RxError
{
    /// An `iter_once` source was subscribed to after its iterator was used up.
    #[error("source iterator was already consumed by an earlier subscription")]
    IterConsumed,

    /// A user supplied predicate refused to give an answer.
    #[error("predicate failed at index {index}: {message}")]
    Predicate
    {
        index: usize,
        message: String,
    },

    #[error("{message}")]
    Custom
    {
        message: String,
    },
}

impl RxError
{
    pub fn predicate(index: usize, message: impl Into<String>) -> Self
    {
        RxError::Predicate { index, message: message.into() }
    }

    pub fn custom(message: impl Into<String>) -> Self
    {
        RxError::Custom { message: message.into() }
    }
}

impl From<&str> for RxError
{
    fn from(message: &str) -> Self { RxError::custom(message) }
}

impl From<String> for RxError
{
    fn from(message: String) -> Self { RxError::custom(message) }
}

#[cfg(test)]
mod test
{
    use super::*;

    #[test]
    fn display()
    {
        assert_eq!(RxError::predicate(2, "boom").to_string(), "predicate failed at index 2: boom");
        assert_eq!(RxError::from("nope").to_string(), "nope");
        assert_eq!(RxError::IterConsumed.to_string(), "source iterator was already consumed by an earlier subscription");
    }
}
