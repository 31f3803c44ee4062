//! Configuration merging.

use crate::config::schema::Config;

/// Merges configurations field by field.
///
/// # Examples
///
/// ```
/// use repath::config::{Config, ConfigMerger};
///
/// let mut result = Config { variable: Some("PATH".into()), ..Default::default() };
/// let high = Config { variable: Some("MANPATH".into()), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.variable.as_deref(), Some("MANPATH"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.variable.is_some() {
            target.variable.clone_from(&source.variable);
        }
        if source.delimiter.is_some() {
            target.delimiter.clone_from(&source.delimiter);
        }
        if source.option_prefixes.is_some() {
            target.option_prefixes.clone_from(&source.option_prefixes);
        }
        if source.option_separator.is_some() {
            target.option_separator.clone_from(&source.option_separator);
        }
        if source.machine_dir.is_some() {
            target.machine_dir.clone_from(&source.machine_dir);
        }

        target.case_sensitive_options = source
            .case_sensitive_options
            .or(target.case_sensitive_options);
        target.strict_options = source.strict_options.or(target.strict_options);
        target.default_target = source.default_target.or(target.default_target);
        target.fix_case = source.fix_case.or(target.fix_case);
        target.keep_orphans = source.keep_orphans.or(target.keep_orphans);
        target.keep_duplicates = source.keep_duplicates.or(target.keep_duplicates);
        target.output_format = source.output_format.or(target.output_format);
        target.busy_timeout_seconds = source.busy_timeout_seconds.or(target.busy_timeout_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::Target;

    #[test]
    fn test_unset_fields_do_not_override() {
        let mut target = Config {
            variable: Some("PATH".into()),
            keep_orphans: Some(true),
            ..Default::default()
        };
        let source = Config {
            default_target: Some(Target::Machine),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.variable.as_deref(), Some("PATH"));
        assert_eq!(target.keep_orphans, Some(true));
        assert_eq!(target.default_target, Some(Target::Machine));
    }

    #[test]
    fn test_set_fields_override() {
        let mut target = Config {
            fix_case: Some(true),
            delimiter: Some(":".into()),
            ..Default::default()
        };
        let source = Config {
            fix_case: Some(false),
            delimiter: Some(";".into()),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.fix_case, Some(false));
        assert_eq!(target.delimiter.as_deref(), Some(";"));
    }
}
