mod test_utils;

use linelog::{api, writers::SharedBuffer, LevelSet, Logger, Mode};
use std::sync::Arc;

#[test]
fn test_api() {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let _logger = Logger::new(Mode::Production)
        .journal(Arc::new(test_utils::NoJournal))
        .levels(LevelSet::all())
        .stdout(out.clone())
        .stderr(err.clone())
        .start();

    let user = 17;
    api!(200, "api call successful");
    api!(301, "moved permanently");
    api!(404, "no such user: {user}");
    api!(500, "internal server error");
    api!(102, "processing");

    assert_eq!(
        out.lines()
            .iter()
            .map(|l| l.split(' ').next().unwrap())
            .collect::<Vec<_>>(),
        ["[INFO]", "[INFO]", "[INFO]"]
    );
    let out = out.contents();
    assert!(out.contains("[200] api call successful"), "{out}");
    assert!(out.contains("[301] moved permanently"), "{out}");
    assert!(out.contains("[102] processing"), "{out}");

    let err = err.lines();
    assert_eq!(err.len(), 2);
    assert!(err[0].starts_with("[WARN] [test_api::test_api:"), "{}", err[0]);
    assert!(err[0].ends_with("] [404] no such user: 17"), "{}", err[0]);
    assert!(err[1].starts_with("[ERROR] "), "{}", err[1]);
    assert!(err[1].ends_with("] [500] internal server error"), "{}", err[1]);
}
