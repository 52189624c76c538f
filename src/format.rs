//! 금액/비율 표시 형식.

/// `$` + 천 단위 구분 정수. 소수점 이하는 반올림한다.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// 반올림한 정수 + `%`.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    // -0.4 가 "-0%" 로 찍히지 않도록 0 을 정규화
    let rounded = value.round() + 0.0;
    format!("{rounded:.0}%")
}

/// 소수 둘째 자리까지 표시하는 단가 형식 (장비당 월 비용 등).
pub fn format_unit_price(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let cents = (abs * 100.0).round() as u64;
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
