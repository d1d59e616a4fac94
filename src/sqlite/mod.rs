// SQLite module - binds through rusqlite prepared statements
//
// - params: conversion of generic values into rusqlite values
// - statement: the `Statement` impl for `rusqlite::Statement`
//
// SQLite reports no parameter metadata, so `DefaultBinderConfiguration` picks the default
// binder at every position; name column binders explicitly with `ColumnBinders`.

mod params;
mod statement;

pub use params::bind_value_to_sqlite_value;
