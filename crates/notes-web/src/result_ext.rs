use tracing::*;

/// Logs the error side of a result, tagged with the caller's location,
/// and hands the result back unchanged.
pub trait ResultExt<T, E, S>
where
    S: ToString,
{
    fn log(self, context: S) -> Result<T, E>;
}

impl<T, E: std::fmt::Display, S: ToString> ResultExt<T, E, S> for Result<T, E> {
    #[track_caller]
    fn log(self, context: S) -> Result<T, E> {
        if let Err(err) = &self {
            let caller_location = std::panic::Location::caller();
            let caller_file = caller_location.file();
            let caller_line = caller_location.line();
            error!(
                err = %err,
                file = %format!("{caller_file}:{caller_line}"),
                "{context}",
                context = context.to_string()
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_passes_result_through() {
        let ok: Result<u8, String> = Ok(7);
        assert_eq!(ok.log("unused"), Ok(7));

        let err: Result<u8, String> = Err("boom".to_string());
        assert_eq!(err.log("operation failed"), Err("boom".to_string()));
    }
}
