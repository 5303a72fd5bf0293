//! Wire contracts between the query client and the dataset server.

pub mod usecases;
