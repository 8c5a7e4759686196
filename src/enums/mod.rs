pub mod consolidation_function;
