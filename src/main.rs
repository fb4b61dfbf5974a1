//! Lunar Phase Quiz demo entry point
//!
//! Runs one scripted quiz session against a logging presenter. A real host
//! drives the same `QuizSession` from its drag and button events.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use lunar_phase_quiz::quiz::{Question, QuizSession, QuizStatus, Report, place_at_angle};
    use lunar_phase_quiz::{Presenter, QuizSettings};

    /// Presenter that logs every notification and tracks orbital speed
    pub struct LogPresenter {
        orbit_speed: f32,
        default_orbit_speed: f32,
        feedback_enabled: bool,
    }

    impl LogPresenter {
        pub fn new(settings: &QuizSettings) -> Self {
            Self {
                orbit_speed: settings.default_orbit_speed,
                default_orbit_speed: settings.default_orbit_speed,
                feedback_enabled: settings.feedback_enabled,
            }
        }
    }

    impl Presenter for LogPresenter {
        fn on_session_start(&mut self) {
            self.orbit_speed = 0.0;
            log::info!("Orbit paused");
        }

        fn on_question_shown(&mut self, index: usize, total: usize, question: &Question) {
            log::info!(
                "Question {}/{}: place the Moon at {} [{}]",
                index + 1,
                total,
                question.name(),
                question.sprite()
            );
        }

        fn on_feedback(&mut self, message: &str, displacement: f32) {
            if self.feedback_enabled {
                log::info!("{} (off by {:.1}°)", message, displacement);
            }
        }

        fn on_completed(&mut self, report: &Report) {
            let grade = report.grade.map(|g| g.as_str()).unwrap_or("-");
            log::info!(
                "Total displacement {:.1}° -> grade {}",
                report.total_displacement,
                grade
            );
            for (i, d) in report.per_question_displacement.iter().enumerate() {
                log::info!("  Q{}: {:.1}°", i + 1, d);
            }
        }

        fn on_session_end(&mut self) {
            self.orbit_speed = self.default_orbit_speed;
            log::info!("Orbit resumed at speed {}", self.orbit_speed);
        }
    }

    /// Play one session with a learner that lands within ±25° of each target
    pub fn run(settings: &QuizSettings, clock_seed: u64) -> lunar_phase_quiz::Result<()> {
        let origin = Vec2::ZERO;
        let radius = settings.effective_orbit_radius();
        let learner_seed = settings.effective_seed(clock_seed).wrapping_add(1);
        let mut learner = Pcg32::seed_from_u64(learner_seed);
        let mut session =
            QuizSession::new(LogPresenter::new(settings), settings, clock_seed, origin);

        session.start()?;
        loop {
            let target = session.state().current_question()?.target_angle;
            let guess = target + learner.random_range(-25.0_f32..25.0);
            session.submit(place_at_angle(origin, radius, guess))?;
            if settings.show_debug_overlay {
                log::info!("[debug] {}", session.state().debug_overlay());
            }
            if session.advance()? == QuizStatus::Completed {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lunar_phase_quiz::QuizSettings;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Lunar Phase Quiz (native demo) starting...");

    let settings = QuizSettings {
        show_debug_overlay: true,
        ..Default::default()
    };
    if let Ok(json) = settings.to_json() {
        log::debug!("Settings: {}", json);
    }

    let clock_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    if let Err(e) = demo::run(&settings, clock_seed) {
        log::error!("Quiz demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host embeds the library directly
}
