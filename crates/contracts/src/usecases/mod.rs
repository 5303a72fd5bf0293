pub mod common;
pub mod u101_upload_dataset;
pub mod u102_translate_query;
pub mod u103_execute_sql;

#[cfg(test)]
mod tests {
    use super::common::UseCaseMetadata;
    use super::u101_upload_dataset::UploadDataset;
    use super::u102_translate_query::TranslateQuery;
    use super::u103_execute_sql::ExecuteSql;

    fn describe<U: UseCaseMetadata>() -> (String, &'static str, &'static str) {
        (U::full_name(), U::endpoint(), U::description())
    }

    #[test]
    fn test_usecases_are_described() {
        for (full_name, endpoint, description) in [
            describe::<UploadDataset>(),
            describe::<TranslateQuery>(),
            describe::<ExecuteSql>(),
        ] {
            assert!(endpoint.starts_with('/'), "{full_name}");
            assert!(!description.is_empty(), "{full_name}");
        }
        assert_eq!(UploadDataset::full_name(), "u101_upload_dataset");
    }
}
