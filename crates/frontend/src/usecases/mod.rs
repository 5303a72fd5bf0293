pub mod u101_upload_dataset;
pub mod u102_translate_query;
pub mod u103_execute_sql;
