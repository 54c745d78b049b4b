use erbeds_derive::erbeds_error;
use std::borrow::Cow;

#[erbeds_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("disk gone"))?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: None, .. }));

    let internal: DemoError = "broken invariant".into();
    assert_eq!(internal.to_string(), "Internal error: broken invariant");
}
