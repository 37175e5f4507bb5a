pub mod columns;
pub mod datagrid;
pub mod is_header;
pub mod parsing;
