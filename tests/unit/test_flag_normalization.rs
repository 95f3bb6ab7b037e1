use manifest_transform::cli::flags::normalize_long_flags;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn single_dash_spelling_matches_double_dash_spelling() {
    let single = normalize_long_flags(&args(&["-instance-group", "router", "-az", "z1,z2"]));
    let double = normalize_long_flags(&args(&["--instance-group", "router", "--az", "z1,z2"]));
    assert_eq!(single, double);
}

#[test]
fn positional_tag_arguments_are_untouched() {
    let normalized = normalize_long_flags(&args(&["key=value", "owner=platform"]));
    assert_eq!(normalized, args(&["key=value", "owner=platform"]));
}

#[test]
fn ip_range_values_are_untouched() {
    let normalized = normalize_long_flags(&args(&["-static-ips", "10.0.0.1-10.0.0.5"]));
    assert_eq!(normalized, args(&["--static-ips", "10.0.0.1-10.0.0.5"]));
}

#[test]
fn negative_instance_counts_are_untouched() {
    let normalized = normalize_long_flags(&args(&["-instances", "-2"]));
    assert_eq!(normalized, args(&["--instances", "-2"]));
}
