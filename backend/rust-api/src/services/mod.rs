use crate::config::Config;
use practice_service::PracticeService;

pub struct AppState {
    pub config: Config,
    pub practice: PracticeService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let practice = PracticeService::new(&config);

        tracing::info!(
            formulas = formula_catalog::all_formulas().len(),
            max_problems_per_request = config.max_problems_per_request,
            "Practice engine ready"
        );

        Self { config, practice }
    }
}

pub(crate) mod calculator;
pub mod formula_catalog;
pub mod formula_dispatcher;
pub mod practice_service;
pub mod problem_generator;
