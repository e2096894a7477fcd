//! Diagnostics on stderr.

/// Print a warning, followed by the source location, to stderr, as
/// one line: `W: <message> at "<file>" line <n>`.
#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}


#[cfg(test)]
mod tests {
    #[test]
    fn t_warn_forms() {
        let key = "footer";
        warn!("plain message");
        warn!("block {:?} has no component {:?}", "card", key);
    }
}
