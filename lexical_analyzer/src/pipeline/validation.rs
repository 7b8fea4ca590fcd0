/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    validate_modules().map_err(|reason| {
        crate::log_error!(
            crate::logging::codes::system::INITIALIZATION_FAILURE,
            "Pipeline validation failed",
            "reason" => &reason
        );
        reason
    })
}

fn validate_modules() -> Result<(), String> {
    crate::file_processor::init_file_processor_logging()?;
    crate::lexical::init_lexical_analysis_logging()?;
    crate::identifier::init_identifier_logging()?;
    crate::symbols::init_symbol_logging()?;
    crate::report::init_report_logging()?;
    crate::interactive::init_interactive_logging()?;

    let data_types = crate::grammar::Keyword::ALL
        .iter()
        .filter(|k| k.is_data_type())
        .count();
    if data_types == 0 {
        return Err("Keyword table defines no data types".to_string());
    }

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "modules_validated" => 6,
        "data_types" => data_types
    );

    Ok(())
}
