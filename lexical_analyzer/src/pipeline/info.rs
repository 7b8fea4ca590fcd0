use crate::config::compile_time::file_processing::{MAX_FILE_SIZE, MAX_LINE_COUNT_FOR_ANALYSIS};
use crate::config::runtime::ReportFormat;
use crate::grammar::Keyword;

/// Information about pipeline capabilities
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    pub stages: Vec<&'static str>,
    pub keyword_count: usize,
    pub data_type_count: usize,
    pub report_formats: Vec<ReportFormat>,
    pub max_file_size: u64,
    pub max_line_count: usize,
    pub build_profile: &'static str,
    pub config_source: String,
    pub cargo_style_output: bool,
}

impl PipelineInfo {
    pub fn report(&self) -> String {
        let formats: Vec<&str> = self.report_formats.iter().map(|f| f.as_str()).collect();
        format!(
            "Lexical Analysis Pipeline:\n\
             - Stages: {}\n\
             - Reserved Keywords: {} ({} data types)\n\
             - Report Formats: {}\n\
             - Max File Size: {} MB\n\
             - Max Line Count: {}\n\
             - Build Profile: {} ({})\n\
             - Cargo-style Output: {}",
            self.stages.join(" -> "),
            self.keyword_count,
            self.data_type_count,
            formats.join(", "),
            self.max_file_size / (1024 * 1024),
            self.max_line_count,
            self.build_profile,
            self.config_source,
            self.cargo_style_output
        )
    }
}

/// Get pipeline capabilities information
pub fn get_pipeline_info() -> PipelineInfo {
    PipelineInfo {
        stages: vec!["read", "analyze", "report"],
        keyword_count: Keyword::ALL.len(),
        data_type_count: Keyword::ALL.iter().filter(|k| k.is_data_type()).count(),
        report_formats: vec![ReportFormat::Text, ReportFormat::Json],
        max_file_size: MAX_FILE_SIZE,
        max_line_count: MAX_LINE_COUNT_FOR_ANALYSIS,
        build_profile: crate::config::build_info::profile(),
        config_source: crate::config::build_info::source_info(),
        cargo_style_output: crate::logging::config::use_cargo_style_output(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_counts_vocabulary() {
        let info = get_pipeline_info();
        assert_eq!(info.keyword_count, 26);
        assert_eq!(info.data_type_count, 11);
        assert!(info.report().contains("read -> analyze -> report"));
    }
}
