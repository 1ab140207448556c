use linelog::{infof, warnf, writers::SharedBuffer, LevelSet, Logger, Mode, Router};
use std::sync::atomic::{AtomicU32, Ordering};

// Values whose Display implementation logs must neither deadlock nor garble the output.
#[test]
fn test_recursion() {
    let out = SharedBuffer::new();
    let router = Logger::new(Mode::Development)
        .levels(LevelSet::all())
        .stdout(out.clone())
        .build();
    let dummy = Dummy(&router);

    for _ in 0..10 {
        warnf!(logger: &router, "This is a warning for {}", dummy);
        infof!(logger: &router, "This is an info message for {}", dummy);
    }

    let lines = out.lines();
    assert_eq!(lines.len(), 40);
    for pair in lines.chunks_exact(2) {
        assert!(pair[0].contains("Here comes the inner message"), "{}", pair[0]);
        assert!(pair[0].contains(" [Dummy::fmt:"), "{}", pair[0]);
        assert!(pair[1].ends_with(" for Dummy!!"), "{}", pair[1]);
    }
}

struct Dummy<'a>(&'a Router);

impl std::fmt::Display for Dummy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        static COUNT: AtomicU32 = AtomicU32::new(0);
        infof!(
            logger: self.0,
            "Here comes the inner message ({}):-| ",
            COUNT.fetch_add(1, Ordering::Relaxed)
        );
        f.write_str("Dummy!!")
    }
}
