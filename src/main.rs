use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use nac_tco_toolbox::app::{self, AppError, OutputFormat, ScenarioOverrides, Session};
use nac_tco_toolbox::config::DEFAULT_CONFIG_PATH;
use nac_tco_toolbox::industry::Industry;
use nac_tco_toolbox::ui_cli::split_ids;
use tracing_subscriber::EnvFilter;

/// NAC 벤더 TCO/ROI 계산기
#[derive(Debug, Parser)]
#[command(name = "nac_tco_toolbox", version, about)]
struct Cli {
    /// UI 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 벤더 카탈로그(TOML). 지정하지 않으면 설정 또는 내장 기준표를 쓴다.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// 결과를 JSON 으로 출력
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 벤더 1개의 TCO 계산
    Calc {
        vendor: String,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// 기준 벤더 대비 비교 (벤더 목록을 생략하면 전체)
    Compare {
        /// 쉼표로 구분한 벤더 id
        #[arg(long, short = 'v')]
        vendors: Option<String>,
        #[arg(long, short = 'b')]
        baseline: Option<String>,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// 현재 벤더에서 기준 벤더로 전환할 때의 ROI
    Roi {
        competitor: String,
        #[arg(long, short = 'b')]
        baseline: Option<String>,
        /// NPV 할인율 (0.08 = 8%)
        #[arg(long)]
        discount_rate: Option<f64>,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// 카탈로그 벤더 목록
    Vendors {
        #[arg(long)]
        industry: Option<Industry>,
    },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

#[derive(Debug, Args)]
struct ScenarioArgs {
    #[arg(long, short = 'd')]
    devices: Option<u32>,
    #[arg(long, short = 'y')]
    years: Option<u32>,
    /// 1 FTE 연 인건비 [USD]
    #[arg(long)]
    fte_cost: Option<f64>,
    /// 볼륨 할인 상한 (0~1)
    #[arg(long)]
    volume_discount: Option<f64>,
    #[arg(long)]
    industry: Option<Industry>,
}

impl From<ScenarioArgs> for ScenarioOverrides {
    fn from(args: ScenarioArgs) -> Self {
        Self {
            device_count: args.devices,
            years: args.years,
            fte_cost_per_year: args.fte_cost,
            volume_discount: args.volume_discount,
            industry: args.industry,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut session = Session::open(&cli.config, cli.catalog.as_deref(), &cli.lang)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let output = match cli.command.unwrap_or(Command::Interactive) {
        Command::Calc { vendor, scenario } => {
            app::calculate(&session, &vendor, &scenario.into(), format)?
        }
        Command::Compare {
            vendors,
            baseline,
            scenario,
        } => {
            let ids = vendors.as_deref().map(split_ids).unwrap_or_default();
            app::compare(&session, &ids, baseline.as_deref(), &scenario.into(), format)?
        }
        Command::Roi {
            competitor,
            baseline,
            discount_rate,
            scenario,
        } => app::roi(
            &session,
            &competitor,
            baseline.as_deref(),
            &scenario.into(),
            discount_rate,
            format,
        )?,
        Command::Vendors { industry } => app::vendors(&session, industry, format)?,
        Command::Interactive => return app::run(&mut session),
    };
    print!("{output}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
