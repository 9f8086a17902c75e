//! Command-line argument scanning.
//!
//! Deliberately tolerant: unrecognized tokens are skipped, a value flag
//! at the very end of the line stops the scan instead of erroring, and a
//! repeated flag overwrites its earlier value. Missing required flags are
//! the driver's concern, not the scanner's.

/// Recognized flags reduced from the raw argument list.
///
/// Built once per invocation and immutable afterwards. The scale factor
/// stays a raw string here; numeric parsing happens in the transformer
/// so that a bad factor fails after load, with its own diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub help: bool,
    pub input: Option<String>,
    pub output: Option<String>,
    pub scale: Option<String>,
}

impl Options {
    /// Scan `args` left to right.
    ///
    /// `-help` is a bare flag; `-file`, `-out`, and (when `with_scale`)
    /// `-scale` consume the following token as their value. When a value
    /// flag is the last token, the scan stops with that flag unset.
    pub fn parse<I, S>(args: I, with_scale: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Options::default();
        let mut tokens = args.into_iter();
        while let Some(token) = tokens.next() {
            match token.as_ref() {
                "-help" => opts.help = true,
                "-file" => match tokens.next() {
                    Some(value) => opts.input = Some(value.as_ref().to_owned()),
                    None => break,
                },
                "-out" => match tokens.next() {
                    Some(value) => opts.output = Some(value.as_ref().to_owned()),
                    None => break,
                },
                "-scale" if with_scale => match tokens.next() {
                    Some(value) => opts.scale = Some(value.as_ref().to_owned()),
                    None => break,
                },
                _ => {}
            }
        }
        opts
    }
}
