use linelog::{writers::SharedBuffer, LevelSet, LinelogError, Logger, Mode};

#[test]
fn test_log_bridge() {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let _logger = Logger::new(Mode::Development)
        .verbose(true)
        .levels(LevelSet::all().without(linelog::Severity::Info))
        .stdout(out.clone())
        .stderr(err.clone())
        .start();
    linelog::bridge_log_crate().unwrap();

    log::error!("error from a library");
    log::info!("info is disabled");
    log::trace!("trace counts as debug");

    let lines = out.lines();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines[0].contains("[ERROR]"), "{}", lines[0]);
    assert!(lines[0].ends_with("[test_log_bridge:15] error from a library"), "{}", lines[0]);
    assert!(lines[1].contains("[DEBUG]"), "{}", lines[1]);
    assert!(lines[1].ends_with("] trace counts as debug"), "{}", lines[1]);
    assert!(!log::log_enabled!(log::Level::Info));
    assert_eq!(err.contents(), "");

    assert!(matches!(
        linelog::bridge_log_crate(),
        Err(LinelogError::Log(_))
    ));
}
