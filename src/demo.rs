// Demonstration driver: copy section, then move section.
use std::io::Write;

use tracing::info;

use crate::buffer::OwnedBuffer;
use crate::error::DemoError;

/// Length of the buffers the demonstration builds explicitly.
pub const DEMO_LEN: usize = 5;

pub const COPY_HEADER: &str = "K: Copy constructor and assignment operator";
pub const MOVE_HEADER: &str = "M: Move constructor and assignment operator";

/// Runs both sections, writing every printed buffer to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    copy_section(out)?;
    move_section(out)?;
    Ok(())
}

/// Copy construction followed by copy assignment onto a default-length buffer.
pub fn copy_section<W: Write>(out: &mut W) -> Result<(), DemoError> {
    info!("running copy section");
    writeln!(out, "{}", COPY_HEADER)?;

    let k1 = OwnedBuffer::new(DEMO_LEN)?;
    let k2 = k1.try_clone()?;
    k1.print(out)?;
    k2.print(out)?;

    let mut k3 = OwnedBuffer::with_default_len()?;
    k3.try_assign_from(&k1)?;
    k3.print(out)?;
    Ok(())
}

/// Move construction followed by move assignment. The moved-from buffer
/// prints as an empty line.
pub fn move_section<W: Write>(out: &mut W) -> Result<(), DemoError> {
    info!("running move section");
    writeln!(out, "{}", MOVE_HEADER)?;

    let mut m1 = OwnedBuffer::new(DEMO_LEN)?;
    let mut m2 = m1.take();
    let mut m3 = OwnedBuffer::with_default_len()?;
    m3.move_assign(&mut m2);
    m3.print(out)?;
    m1.print(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;

    fn capture(section: fn(&mut Vec<u8>) -> Result<(), DemoError>) -> String {
        let mut out = Vec::new();
        section(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_copy_section_output() {
        let expected = "K: Copy constructor and assignment operator\n\
                        0 1 2 3 4\n\
                        0 1 2 3 4\n\
                        0 1 2 3 4\n";
        assert_eq!(capture(copy_section), expected);
    }

    #[test]
    fn test_move_section_output() {
        let expected = "M: Move constructor and assignment operator\n\
                        0 1 2 3 4\n\
                        \n";
        assert_eq!(capture(move_section), expected);
    }

    #[test]
    fn test_full_run_output() {
        let output = capture(run);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                COPY_HEADER,
                "0 1 2 3 4",
                "0 1 2 3 4",
                "0 1 2 3 4",
                MOVE_HEADER,
                "0 1 2 3 4",
                "",
            ]
        );
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_run_leaks_nothing() {
        let before = stats::snapshot();
        capture(run);
        let delta = stats::snapshot().since(before);
        assert_eq!(delta.live(), 0);
        // copy: k1, k2, k3 default, k3 reassigned; move: m1, m3 default
        assert_eq!(delta.acquired, 6);
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        match run(&mut Closed) {
            Err(DemoError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("Expected io error, got {:?}", other),
        }
    }
}
