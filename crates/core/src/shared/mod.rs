pub mod annotation;
pub mod bounding_box;
pub mod box_record;
pub mod constants;
pub mod match_entry;
pub mod match_table;
pub mod numeric;
pub mod prediction;

#[cfg(test)]
pub(crate) mod test_fixtures;
