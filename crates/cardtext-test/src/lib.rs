//! cardtext - integration test support.
//!
//! Re-exports the workspace crates and provides vCard fixtures shared by the
//! tests under `tests/`.

pub use cardtext_app as app;
pub use cardtext_rfc as rfc;

pub mod fixtures {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Two well-formed records the way Android contact exports write them.
    pub const ANDROID_EXPORT: &str = "\
BEGIN:VCARD\r
VERSION:2.1\r
N;CHARSET=UTF-8:Παπαδόπουλος;Γιώργος;;;\r
FN;CHARSET=UTF-8:Γιώργος Παπαδόπουλος\r
TEL;CELL:+30 690 000 0000\r
TEL;HOME:210-123-4567\r
EMAIL;HOME:giorgos@example.gr\r
END:VCARD\r
BEGIN:VCARD\r
VERSION:2.1\r
N:Doe;John;M;;\r
FN:John Doe\r
TEL;CELL:(555) 123-4567\r
TEL;CELL:555 765 4321\r
EMAIL;HOME;pref:john@example.com\r
ORG:Acme\r
BDAY:1990-05-17\r
NOTE:Line1\\nLine2\r
REV:20230101T120000Z\r
END:VCARD\r
";

    /// Apple-style export with grouped properties and vCard 3.0 parameters.
    pub const APPLE_EXPORT: &str = "\
BEGIN:VCARD
VERSION:3.0
PRODID:-//Apple Inc.//iPhone OS 17.0//EN
N:Roe;Jane;;;
FN:Jane Roe
NICKNAME:JJ
ORG:Initech;
TITLE:Manager
item1.TEL;type=pref:+1 (555) 010-0000
item2.TEL:555.010.0001
EMAIL;type=INTERNET;type=WORK;type=pref:jane@initech.test
X-IMAGETYPE:JPEG
END:VCARD
";

    /// Builds `count` minimal records named `Contact 1`, `Contact 2`, ...
    #[must_use]
    pub fn numbered_records(count: usize) -> String {
        (1..=count)
            .map(|i| format!("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Contact {i}\r\nEND:VCARD\r\n"))
            .collect()
    }

    /// Returns a fresh path in the system temp directory.
    #[must_use]
    pub fn temp_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("cardtext-{}-{n}-{name}", std::process::id()))
    }
}
