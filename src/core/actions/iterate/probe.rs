use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Serial,
    Rayon,
}

impl BackendKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Rayon => "rayon",
        }
    }

    #[must_use]
    pub const fn is_accelerated(self) -> bool {
        matches!(self, Self::Rayon)
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Picks the step backend once at startup.
#[must_use]
pub fn probe_backend() -> BackendKind {
    backend_for_threads(rayon::current_num_threads())
}

fn backend_for_threads(threads: usize) -> BackendKind {
    let kind = if threads > 1 {
        BackendKind::Rayon
    } else {
        BackendKind::Serial
    };

    debug!("{} worker thread(s) available, using {} backend", threads, kind);
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_thread_falls_back_to_serial() {
        assert_eq!(backend_for_threads(1), BackendKind::Serial);
        assert_eq!(backend_for_threads(0), BackendKind::Serial);
    }

    #[test]
    fn multiple_threads_select_rayon() {
        assert_eq!(backend_for_threads(2), BackendKind::Rayon);
        assert_eq!(backend_for_threads(64), BackendKind::Rayon);
    }

    #[test]
    fn only_rayon_is_accelerated() {
        assert!(BackendKind::Rayon.is_accelerated());
        assert!(!BackendKind::Serial.is_accelerated());
    }
}
