use std::path::PathBuf;

use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use saju_engine::fortune::{
    CareerFortune, FinanceFortune, HealthFortune, LoveFortune, MarriageFortune, WEEKDAY_NAMES,
    WeeklyFortune, YearlyFortune, career_fortune, finance_fortune, health_fortune, love_fortune,
    marriage_fortune, weekly_fortune, yearly_fortune,
};
use saju_engine::{
    BirthInput, CalendarType, ChartOptions, Compatibility, DailyFortune, EngineConfig,
    FileStorage, Gender, HistoryStore, HourSlot, SajuResult, SavedReading, SolarDate,
    calculate_compatibility, calculate_saju, daily_fortune, lunar_to_solar, solar_to_lunar,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar (사주) chart CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct BirthArgs {
    /// Birth year
    year: i32,
    /// Birth month
    month: u32,
    /// Birth day
    day: u32,
    /// Calendar of the date: solar or lunar
    #[arg(long, default_value = "solar")]
    calendar: CalendarType,
    /// The lunar date is in the leap month
    #[arg(long)]
    leap: bool,
    /// Hour slot: ja chuk in myo jin sa o mi sin yu sul hae unknown
    #[arg(long, default_value = "unknown")]
    hour: HourSlot,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,
}

impl BirthArgs {
    fn input(&self) -> BirthInput {
        BirthInput {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            calendar: self.calendar,
            is_leap_month: self.leap,
            gender: self.gender,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart reading
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Current age (overrides the config reference year)
        #[arg(long)]
        age: Option<u32>,
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
        /// Save the reading to history
        #[arg(long)]
        save: bool,
        /// Name stored with a saved reading
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Solar date to lunar date
    Lunar {
        year: i32,
        month: u32,
        day: u32,
    },
    /// Lunar date to solar date
    Solar {
        year: i32,
        month: u32,
        day: u32,
        /// The date is in the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Compatibility of two solar birth dates (YYYY-MM-DD)
    Compat {
        first: String,
        second: String,
        /// Hour slot of the first date
        #[arg(long, default_value = "unknown")]
        first_hour: HourSlot,
        /// Hour slot of the second date
        #[arg(long, default_value = "unknown")]
        second_hour: HourSlot,
        #[arg(long)]
        json: bool,
    },
    /// Daily pillar score of a chart against a date
    Daily {
        #[command(flatten)]
        birth: BirthArgs,
        /// Date to score (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Topic fortunes of a chart
    Fortune {
        #[command(subcommand)]
        kind: FortuneKind,
    },
    /// Saved readings
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Args, Clone)]
struct FortuneArgs {
    #[command(flatten)]
    birth: BirthArgs,
    /// Print the fortune as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum FortuneKind {
    /// Daily scores of the week containing a date
    Weekly {
        #[command(flatten)]
        args: FortuneArgs,
        /// Any date of the week (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Year pillar and monthly scores
    Yearly {
        #[command(flatten)]
        args: FortuneArgs,
        /// Year to read (default the config reference year)
        #[arg(long = "year", id = "target_year", value_name = "YEAR")]
        year: Option<i32>,
    },
    /// Career stars and promotion periods
    Career {
        #[command(flatten)]
        args: FortuneArgs,
    },
    /// Wealth stars and investment periods
    Finance {
        #[command(flatten)]
        args: FortuneArgs,
    },
    /// Organ balance for a calendar month
    Health {
        #[command(flatten)]
        args: FortuneArgs,
        /// Calendar month 1-12 (default this month)
        #[arg(long = "month", id = "target_month", value_name = "MONTH", value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Love stars by gender
    Love {
        #[command(flatten)]
        args: FortuneArgs,
    },
    /// Spouse star and peach-blossom branches
    Marriage {
        #[command(flatten)]
        args: FortuneArgs,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List saved readings, newest first
    List,
    /// Show one reading (id or id prefix)
    Show { id: String },
    /// Remove one reading (id or id prefix)
    Remove { id: String },
    /// Remove every reading
    Clear,
}

fn parse_date(s: &str) -> Result<SolarDate, String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    SolarDate::new(year, month, day).map_err(|e| e.to_string())
}

fn require_date(s: &str) -> SolarDate {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn today() -> SolarDate {
    let now = chrono::Local::now().date_naive();
    SolarDate { year: now.year(), month: now.month(), day: now.day() }
}

fn load_config(path: Option<&PathBuf>) -> EngineConfig {
    EngineConfig::load_or_default(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn require_reading(input: &BirthInput, options: &ChartOptions) -> SajuResult {
    calculate_saju(input, options).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn history_store(config: &EngineConfig) -> HistoryStore<FileStorage> {
    HistoryStore::with_limit(FileStorage::new(&config.history_dir), config.history_limit)
}

fn find_reading(readings: Vec<SavedReading>, prefix: &str) -> Option<SavedReading> {
    let mut matches = readings.into_iter().filter(|r| r.id.to_string().starts_with(prefix));
    let first = matches.next()?;
    match matches.next() {
        Some(_) => {
            eprintln!("Ambiguous id prefix: {prefix}");
            std::process::exit(1);
        }
        None => Some(first),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            std::process::exit(1);
        }
    }
}

fn print_reading(r: &SajuResult) {
    let c = &r.chart;
    match &r.lunar_date {
        Some(l) => println!("양력 {}  음력 {}", r.solar_date, l),
        None => println!("양력 {}", r.solar_date),
    }
    println!("띠: {}", c.zodiac_animal());
    println!();

    println!("{:<6} {:<6} {:<10} {:<10}", "", "간지", "천간", "지지");
    for g in &r.ten_gods {
        let p = c.pillar(g.position);
        if !c.hour_known && g.position == saju_engine::PillarPosition::Hour {
            println!("{:<6} {:<6} (시간 미상)", g.position.name(), "--");
            continue;
        }
        println!(
            "{:<6} {:<6} {:<10} {:<10}",
            g.position.name(),
            p,
            format!("{} {}", g.stem.name(), g.stem_god.name()),
            format!("{} {}", g.branch.name(), g.branch_god.name()),
        );
    }
    println!();

    let b = &r.five_elements;
    println!(
        "오행: 목 {:.1}  화 {:.1}  토 {:.1}  금 {:.1}  수 {:.1}  (강: {}, 약: {})",
        b.wood, b.fire, b.earth, b.metal, b.water, b.dominant, b.lacking
    );

    let dm = r.day_master();
    let s = dm.breakdown;
    println!(
        "일간 {} {}: {}점 {} (득령 {}, 월령 {}, 비겁 {}, 인성 {}, 십이운성 {} {}, 지장간 {})",
        dm.day_master,
        dm.day_element,
        dm.score,
        dm.tier.name(),
        s.seasonal,
        dm.seasonal_state.name(),
        s.peer,
        s.resource,
        s.vitality,
        dm.day_stage.name(),
        s.hidden
    );
    if dm.reduced_confidence {
        println!("  (시간 미상: 자시 기준으로 계산되어 신뢰도가 낮습니다)");
    }

    let y = r.yongshin();
    println!(
        "용신 {}  희신 {}  한신 {}  구신 {}  기신 {}",
        y.favorable, y.ally_of_favorable, y.neutral, y.ally_of_unfavorable, y.unfavorable
    );
    println!("오행 선호 순: {}", y.ranked().map(|e| e.name()).join(" > "));
    println!("격국: {}", r.pattern.name());
    println!();

    println!("대운:");
    for p in &r.luck_cycles {
        let mark = if p.is_current { " <" } else { "" };
        println!("  {:>3}-{:<3} {}{}", p.start_age, p.end_age, p.pillar, mark);
    }

    if !r.branch_relations.is_empty() {
        println!("지지 관계:");
        for rel in &r.branch_relations {
            let branches: Vec<String> = rel.branches.iter().map(|b| b.to_string()).collect();
            let element = rel.element.map(|e| format!(" → {e}")).unwrap_or_default();
            println!("  {} {}{}", rel.kind.name(), branches.join(""), element);
        }
    }

    if !r.spirit_killings.is_empty() {
        println!("신살:");
        for sk in &r.spirit_killings {
            let positions: Vec<&str> = sk.positions.iter().map(|p| p.name()).collect();
            println!("  {} ({}) [{}] {}", sk.marker.name(), sk.marker.hanja(), sk.tone.name(), positions.join(", "));
        }
    }

    let rec = &r.recommendations;
    println!();
    println!("행운: 색 {}  숫자 {}  방향 {}", rec.colors, rec.number, rec.direction);
}

fn print_compat(c: &Compatibility) {
    for cat in &c.categories {
        println!("{:<10} {:>3}", cat.aspect.name(), cat.score);
    }
    println!("종합 {}점: {}", c.total, c.verdict.summary());
}

fn print_daily(f: &DailyFortune) {
    println!("{} 일진 {} ({})", f.date, f.pillar, f.pillar.korean_name());
    println!("{}점: {}", f.score, f.band.summary());
}

fn join_ages(ages: &[u32]) -> String {
    if ages.is_empty() {
        return "-".to_string();
    }
    ages.iter().map(|a| format!("{a}세")).collect::<Vec<_>>().join(", ")
}

fn print_weekly(w: &WeeklyFortune) {
    println!("주간 운세 {}", w.range_label());
    for (name, d) in WEEKDAY_NAMES.iter().zip(&w.days) {
        println!("{}/{}({})  {}  {:>3}", d.date.month, d.date.day, name, d.pillar, d.score);
    }
    println!("최고 {}  최저 {}  평균 {}점", w.best_day, w.worst_day, w.average);
    println!("{}", w.summary);
    println!("{}", w.advice);
}

fn print_yearly(y: &YearlyFortune) {
    println!("{}년 {} ({}) {}: {}", y.year, y.pillar, y.pillar.korean_name(), y.ten_god.name(), y.theme);
    match y.current_luck {
        Some(p) => println!("현재 대운 {p}"),
        None => println!("대운 정보 없음"),
    }
    for m in &y.months {
        println!("{:>2}월  {}  {:>3}  {}", m.month, m.pillar, m.score, m.keyword.name());
    }
    println!("{}점: {}", y.score, y.summary);
    println!("{}", y.advice);
}

fn print_career(c: &CareerFortune) {
    let stars: Vec<String> = c.stars.iter().map(|s| format!("{} {}", s.god.name(), s.count)).collect();
    println!("직업 관련 십신: {}", stars.join(", "));
    println!("승진/이직 유리 나이: {}", join_ages(&c.promotion_ages));
    println!("적합 직업: {}", c.jobs.join(", "));
    println!("강점: {}", c.strengths.join(", "));
    println!("{}", c.style);
    println!("{}점: {}", c.score, c.summary);
    println!("{}", c.advice);
}

fn print_finance(f: &FinanceFortune) {
    println!("정재 {}  편재 {}", f.regular_wealth, f.windfall);
    println!("투자 유리 나이: {}", join_ages(&f.investment_ages));
    println!("{}", f.style);
    println!("추천: {}", f.recommendations.join(", "));
    println!("주의: {}", f.cautions.join(", "));
    println!("{}점: {}", f.score, f.summary);
    println!("{}", f.advice);
}

fn print_health(h: &HealthFortune) {
    for o in &h.organs {
        println!("{}  {:<10} {}  {}", o.element, o.organs, o.count, o.status.name());
    }
    println!("{}", h.seasonal_advice);
    for tip in &h.tips {
        println!("- {tip}");
    }
    println!("{}점: {}", h.score, h.summary);
    println!("{}", h.advice);
}

fn print_love(l: &LoveFortune) {
    let stars: Vec<&str> = l.stars.iter().map(|g| g.name()).collect();
    println!("애정 관련 십신: {} ({}개)", stars.join(", "), l.star_count);
    println!("{}", l.style);
    println!("{}", l.influence);
    println!("강점: {}", l.strengths.join(", "));
    println!("주의: {}", l.cautions.join(", "));
    println!("{}점: {}", l.score, l.summary);
    println!("{}", l.advice);
}

fn print_marriage(m: &MarriageFortune) {
    let positions: Vec<String> =
        m.positions.iter().map(|p| format!("{} {}", p.position.name(), p.part.name())).collect();
    println!("배우자성 {} {}개: {}", m.spouse_star.name(), m.star_count, positions.join(", "));
    let peach: Vec<&str> = m.peach_blossom.iter().map(|p| p.name()).collect();
    if !peach.is_empty() {
        println!("도화살: {}", peach.join(", "));
    }
    println!("배우자 오행 {}: {}", m.spouse_element, m.spouse_traits.join(", "));
    println!("결혼 유리 나이: {}", join_ages(&m.best_ages));
    println!("{}점: {}", m.score, m.summary);
    println!("{}", m.advice);
}

fn run_fortune(kind: FortuneKind, config: &EngineConfig) {
    let reading = |args: &FortuneArgs, options: ChartOptions| require_reading(&args.birth.input(), &options);
    match kind {
        FortuneKind::Weekly { args, date } => {
            let r = reading(&args, config.chart_options());
            let date = date.as_deref().map_or_else(today, require_date);
            let w = weekly_fortune(r.chart.day, date);
            if args.json {
                print_json(&w);
            } else {
                print_weekly(&w);
            }
        }
        FortuneKind::Yearly { args, year } => {
            let year = year.unwrap_or_else(|| config.resolved_reference_year());
            let r = reading(&args, ChartOptions { reference_year: Some(year), current_age: None });
            let y = yearly_fortune(&r, year);
            if args.json {
                print_json(&y);
            } else {
                print_yearly(&y);
            }
        }
        FortuneKind::Career { args } => {
            let c = career_fortune(&reading(&args, config.chart_options()));
            if args.json {
                print_json(&c);
            } else {
                print_career(&c);
            }
        }
        FortuneKind::Finance { args } => {
            let f = finance_fortune(&reading(&args, config.chart_options()));
            if args.json {
                print_json(&f);
            } else {
                print_finance(&f);
            }
        }
        FortuneKind::Health { args, month } => {
            let month = month.unwrap_or_else(|| today().month);
            let h = health_fortune(&reading(&args, config.chart_options()), month);
            if args.json {
                print_json(&h);
            } else {
                print_health(&h);
            }
        }
        FortuneKind::Love { args } => {
            let l = love_fortune(&reading(&args, config.chart_options()), args.birth.gender);
            if args.json {
                print_json(&l);
            } else {
                print_love(&l);
            }
        }
        FortuneKind::Marriage { args } => {
            let m = marriage_fortune(&reading(&args, config.chart_options()), args.birth.gender);
            if args.json {
                print_json(&m);
            } else {
                print_marriage(&m);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Chart { birth, age, json, save, name } => {
            let input = birth.input();
            let mut options = config.chart_options();
            options.current_age = age;
            let result = require_reading(&input, &options);
            if json {
                print_json(&result);
            } else {
                print_reading(&result);
            }
            if save {
                let saved = history_store(&config).add(name, input, result);
                tracing::info!(id = %saved.id, "reading saved");
                eprintln!("saved {}", saved.id);
            }
        }

        Commands::Lunar { year, month, day } => match solar_to_lunar(year, month, day) {
            Ok(l) => println!("{l}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Solar { year, month, day, leap } => match lunar_to_solar(year, month, day, leap) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Compat { first, second, first_hour, second_hour, json } => {
            let options = config.chart_options();
            let read = |s: &str, hour: HourSlot| {
                let d = require_date(s);
                require_reading(&BirthInput::solar(d.year, d.month, d.day, hour, Gender::Male), &options)
            };
            let a = read(&first, first_hour);
            let b = read(&second, second_hour);
            let c = calculate_compatibility(&a, &b);
            if json {
                print_json(&c);
            } else {
                println!("{}  ×  {}", a.chart, b.chart);
                print_compat(&c);
            }
        }

        Commands::Daily { birth, date, json } => {
            let result = require_reading(&birth.input(), &config.chart_options());
            let date = date.as_deref().map_or_else(today, require_date);
            let f = daily_fortune(result.chart.day, date);
            if json {
                print_json(&f);
            } else {
                print_daily(&f);
            }
        }

        Commands::Fortune { kind } => run_fortune(kind, &config),

        Commands::History { command } => {
            let mut store = history_store(&config);
            match command {
                HistoryCommand::List => {
                    for r in store.list() {
                        println!(
                            "{}  {}  {}  {}",
                            r.id,
                            r.created_at.format("%Y-%m-%d %H:%M"),
                            r.result.chart,
                            r.name
                        );
                    }
                }
                HistoryCommand::Show { id } => match find_reading(store.list(), &id) {
                    Some(r) => {
                        println!("{} ({})", r.name, r.id);
                        print_reading(&r.result);
                    }
                    None => {
                        eprintln!("No reading with id {id}");
                        std::process::exit(1);
                    }
                },
                HistoryCommand::Remove { id } => match find_reading(store.list(), &id) {
                    Some(r) => {
                        store.remove(r.id);
                        println!("removed {}", r.id);
                    }
                    None => {
                        eprintln!("No reading with id {id}");
                        std::process::exit(1);
                    }
                },
                HistoryCommand::Clear => store.clear(),
            }
        }
    }
}
