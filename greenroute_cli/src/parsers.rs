use greenroute_traffic::GeoPoint;

/// Parses `lat,lon` or `lat,lon,label`.
pub fn parse_stop(input: &str) -> Result<GeoPoint, String> {
    let mut parts = input.splitn(3, ',');

    let lat = parse_coordinate(parts.next(), "latitude", -90.0..=90.0)?;
    let lon = parse_coordinate(parts.next(), "longitude", -180.0..=180.0)?;

    let point = GeoPoint::new(lat, lon);
    match parts.next().map(str::trim) {
        Some(label) if !label.is_empty() => Ok(point.with_label(label)),
        _ => Ok(point),
    }
}

fn parse_coordinate(
    part: Option<&str>,
    name: &str,
    range: std::ops::RangeInclusive<f64>,
) -> Result<f64, String> {
    let part = part.ok_or_else(|| format!("Missing {}", name))?;
    let value: f64 = part
        .trim()
        .parse()
        .map_err(|_| format!("Invalid {} {:?}", name, part))?;

    if !range.contains(&value) {
        return Err(format!("{} {} out of range", name, value));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stop() {
        assert_eq!(parse_stop("12.97,77.59"), Ok(GeoPoint::new(12.97, 77.59)));
        assert_eq!(
            parse_stop(" 12.97 , 77.59 , UB City, Bangalore"),
            Ok(GeoPoint::new(12.97, 77.59).with_label("UB City, Bangalore"))
        );
    }

    #[test]
    fn test_parse_stop_invalid() {
        assert!(parse_stop("12.97").is_err());
        assert!(parse_stop("abc,77.59").is_err());
        assert!(parse_stop("95.0,77.59").is_err());
        assert!(parse_stop("12.0,190.0").is_err());
    }
}
