use erbeds_derive::erbeds_error;
use std::borrow::Cow;

#[erbeds_error]
pub enum LookupError {
    #[error("Unknown key{}: {key}", format_context(.context))]
    UnknownKey { key: String, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, LookupError> {
    raw.parse::<i64>().context("Parsing bed count")
}

fn main() {
    let err = parse("many").unwrap_err();
    assert_eq!(err.context(), Some("Parsing bed count"));
    assert!(err.to_string().starts_with("Parse error (Parsing bed count): "));

    let missing: Result<(), LookupError> =
        Err(LookupError::UnknownKey { key: "서구".to_owned(), context: None });
    let err = missing.with_context(|| format!("region {}", "광주광역시")).unwrap_err();
    assert_eq!(err.context(), Some("region 광주광역시"));
    assert_eq!(err.to_string(), "Unknown key (region 광주광역시): 서구");
}
