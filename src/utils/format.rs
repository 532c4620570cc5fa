/// Round to at most `depth` decimal places, drop trailing zeros and
/// insert comma thousands separators, en-US style.
pub fn format_value(num: f64, depth: u32) -> String {
    let factor = 10f64.powi(depth as i32);
    let rounded = (num * factor).round() / factor;

    let text = format!("{:.*}", depth as usize, rounded);
    let text = match text.split_once('.') {
        Some(_) => text.trim_end_matches('0').trim_end_matches('.'),
        None => text.as_str(),
    };

    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_thousands(int_part), frac_part),
        None => group_thousands(text),
    }
}

/// Convert ms to s once the raw value reaches a full second. The unit
/// is picked before rounding, so 999.96 renders as `1,000ms`.
pub fn format_time(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{}s", format_value(ms / 1000.0, 1))
    } else {
        format!("{}ms", format_value(ms, 0))
    }
}

/// Capitalize the first letter.
pub fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
