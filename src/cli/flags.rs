/// Rewrites single-dash long flags (`-instance-group`) into the
/// double-dash form clap expects. Both spellings of every flag stay
/// accepted on the command line.
///
/// Only multi-character tokens whose first character after the dash is a
/// letter are rewritten; negative numbers and short flags pass through.
pub fn normalize_long_flags(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| match arg.strip_prefix('-') {
            Some(rest)
                if !rest.starts_with('-')
                    && rest.len() > 1
                    && rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) =>
            {
                format!("-{arg}")
            }
            _ => arg.clone(),
        })
        .collect()
}
