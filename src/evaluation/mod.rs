pub mod labels;
pub mod pipeline;
pub mod report;
