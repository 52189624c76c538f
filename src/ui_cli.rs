use std::io::{self, BufRead, Write};

use crate::app::{self, AppError, OutputFormat, ScenarioOverrides, Session};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Compare,
    Roi,
    Vendors,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_ROI,
        keys::MAIN_MENU_VENDORS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    select_menu(&mut io::stdin().lock(), tr)
}

/// 올바른 번호가 들어올 때까지 읽는다. 입력이 끝나면 종료로 본다.
fn select_menu<R: BufRead>(input: &mut R, tr: &Translator) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(err) if is_end_of_input(&err) => return Ok(MenuChoice::Exit),
            Err(err) => return Err(err),
        };
        match parse_menu(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 표준 입력이 닫혀 더 읽을 수 없는 경우인지 확인한다.
pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

fn parse_menu(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Calculate),
        "2" => Some(MenuChoice::Compare),
        "3" => Some(MenuChoice::Roi),
        "4" => Some(MenuChoice::Vendors),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 벤더 TCO 메뉴를 처리한다.
pub fn handle_calculate(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::CALCULATE_HEADING));
    let vendor = read_line(tr.t(keys::PROMPT_VENDOR))?;
    let overrides = read_scenario(session)?;
    let out = app::calculate(session, vendor.trim(), &overrides, OutputFormat::Text)?;
    print!("{out}");
    Ok(())
}

/// 벤더 비교 메뉴를 처리한다.
pub fn handle_compare(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::COMPARE_HEADING));
    let list = read_line(tr.t(keys::PROMPT_VENDOR_LIST))?;
    let ids = split_ids(&list);
    let overrides = read_scenario(session)?;
    let out = app::compare(session, &ids, None, &overrides, OutputFormat::Text)?;
    print!("{out}");
    Ok(())
}

/// 전환 ROI 메뉴를 처리한다.
pub fn handle_roi(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::ROI_HEADING));
    let competitor = read_line(tr.t(keys::PROMPT_COMPETITOR))?;
    let overrides = read_scenario(session)?;
    let out = app::roi(
        session,
        competitor.trim(),
        None,
        &overrides,
        None,
        OutputFormat::Text,
    )?;
    print!("{out}");
    Ok(())
}

/// 벤더 목록 메뉴를 처리한다.
pub fn handle_vendors(session: &Session) -> Result<(), AppError> {
    println!("{}", session.tr.t(keys::VENDORS_HEADING));
    let out = app::vendors(session, session.config.defaults.industry, OutputFormat::Text)?;
    print!("{out}");
    Ok(())
}

/// 설정 메뉴를 처리한다. 현재는 기준 벤더만 변경한다.
pub fn handle_settings(session: &mut Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_BASELINE),
        session.config.baseline_vendor
    );
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_BASELINE))?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(());
    }
    match session.catalog.find(sel) {
        Some(vendor) => {
            println!("{} {}", tr.t(keys::SETTINGS_SAVED), vendor.id);
            session.config.baseline_vendor = vendor.id.clone();
        }
        None => println!("{}", tr.t(keys::SETTINGS_UNKNOWN_VENDOR)),
    }
    Ok(())
}

fn read_scenario(session: &Session) -> Result<ScenarioOverrides, AppError> {
    let tr = &session.tr;
    let d = &session.config.defaults;
    let mut input = io::stdin().lock();
    Ok(ScenarioOverrides {
        device_count: read_optional(&mut input, tr, keys::PROMPT_DEVICE_COUNT, d.device_count)?,
        years: read_optional(&mut input, tr, keys::PROMPT_YEARS, d.years)?,
        fte_cost_per_year: read_optional(
            &mut input,
            tr,
            keys::PROMPT_FTE_COST,
            d.fte_cost_per_year,
        )?,
        ..ScenarioOverrides::default()
    })
}

/// 쉼표/공백으로 구분된 벤더 id 목록.
pub fn split_ids(list: &str) -> Vec<String> {
    list.split([',', ' '])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 0 바이트면 `UnexpectedEof`.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "입력이 끝났습니다").into());
    }
    Ok(buf)
}

/// 값을 입력받는다. 빈 입력이면 None (설정 기본값 사용).
fn read_optional<R, T>(
    input: &mut R,
    tr: &Translator,
    label: &str,
    default: T,
) -> Result<Option<T>, AppError>
where
    R: BufRead,
    T: std::str::FromStr + std::fmt::Display,
{
    let prompt = format!(
        "{} [{default}, {}]: ",
        tr.t(label),
        tr.t(keys::PROMPT_KEEP_DEFAULT)
    );
    loop {
        let s = read_line_from(input, &prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.replace(',', "").parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu(" 1\n"), Some(MenuChoice::Calculate));
        assert_eq!(parse_menu("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu("9"), None);
    }

    #[test]
    fn vendor_list_splits_on_commas_and_spaces() {
        assert_eq!(
            split_ids("cisco, aruba  forescout,"),
            vec!["cisco", "aruba", "forescout"]
        );
        assert!(split_ids("  ").is_empty());
    }

    #[test]
    fn closed_input_exits_the_menu() {
        let tr = Translator::new("en");
        let mut input = io::Cursor::new("9\n");
        assert_eq!(select_menu(&mut input, &tr).expect("menu"), MenuChoice::Exit);
        let mut input = io::Cursor::new("2\n");
        assert_eq!(select_menu(&mut input, &tr).expect("menu"), MenuChoice::Compare);
    }

    #[test]
    fn closed_input_stops_number_prompts() {
        let tr = Translator::new("en");
        let mut input = io::Cursor::new("abc\n");
        let err = read_optional::<_, u32>(&mut input, &tr, keys::PROMPT_YEARS, 3).unwrap_err();
        assert!(is_end_of_input(&err), "{err:?}");

        let mut input = io::Cursor::new("1,200\n");
        let value = read_optional::<_, u32>(&mut input, &tr, keys::PROMPT_DEVICE_COUNT, 1)
            .expect("read");
        assert_eq!(value, Some(1_200));
    }
}
