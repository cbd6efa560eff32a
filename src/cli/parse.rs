use wayfinder_core::graph::{EdgeSpec, Strategy};

/// Parse strategy name (scan or heap)
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse an inline edge written as `FROM-TO=WEIGHT`, e.g. `A-B=4`
///
/// The weight is split off at the last `=` and the endpoints at the first
/// `-`, so a negative weight (`A-B=-1`) still parses and is rejected later
/// by the graph itself. Node ids containing `-` are ambiguous here and need
/// a graph file.
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let (endpoints, weight) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected FROM-TO=WEIGHT, got '{}'", s))?;
    let (from, to) = endpoints
        .split_once('-')
        .ok_or_else(|| format!("expected FROM-TO=WEIGHT, got '{}'", s))?;

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("edge '{}' is missing an endpoint", s));
    }
    if to.contains('-') {
        return Err(format!(
            "edge '{}' has more than one '-'; node ids with '-' need --graph",
            s
        ));
    }
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{}' in edge '{}'", weight, s))?;

    Ok(EdgeSpec::new(from, to, weight))
}

/// Parse an edge probability in `0.0..=1.0`
pub fn parse_density(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("invalid density '{}'", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("density must be between 0.0 and 1.0, got {}", value))
    }
}
