/// Metadata identifying a UseCase and the endpoint that serves it
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "upload_dataset")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// Server path, relative to the API base (e.g. "/upload")
    fn endpoint() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u101_upload_dataset"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
