mod hierarchy_parser;

pub use hierarchy_parser::HierarchyParser;
