/// Errors raised while building or applying a manifest transformation.
///
/// Builder-phase variants cover flag validation; apply-phase variants cover
/// lookups and structural preconditions. All of them are terminal for the
/// current invocation.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("missing required flag -{0}")]
    MissingFlag(&'static str),
    #[error("either -lifecycle or -instance-group must be specified, but not both")]
    AmbiguousTarget,
    #[error("invalid format for az, cannot contain space")]
    AzContainsSpace,
    #[error("invalid format for az, must be comma-separated")]
    EmptyAzList,
    #[error("invalid format for extension names, must be comma-separated")]
    EmptyExtensionList,
    #[error("invalid IP range {0:?}")]
    InvalidIpRange(String),
    #[error("{0:?} is not a valid IP address")]
    InvalidIpAddress(String),
    #[error("missing tag specifier(s) [format key=value]")]
    MissingTagSpecifiers,
    #[error("invalid tag specifier {0:?}, expected format key=value")]
    InvalidTagSpecifier(String),
    #[error("invalid value {0} for -instances, must be a non-negative integer")]
    InvalidInstanceCount(i64),
    #[error("couldn't find instance group {0}")]
    UnknownInstanceGroup(String),
    #[error("expected 1 network, found {0}")]
    UnexpectedNetworkCount(usize),
    #[error("instance group {0} already exists")]
    DuplicateInstanceGroup(String),
    #[error("duplicate transformation {0:?}")]
    DuplicateTransformation(String),
    #[error("error applying transformation to instance group {group}: {source}")]
    GroupApply {
        group: String,
        source: Box<TransformError>,
    },
    #[error(transparent)]
    Usage(#[from] clap::Error),
}
