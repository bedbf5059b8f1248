//! ksl - 한국어 문장을 KSL 글로스로 변환해 JSON으로 출력
//!
//! 문장을 주지 않으면 표준 입력에서 한 줄씩 읽습니다.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use ksl_gloss::config::load_config;
use ksl_gloss::KslConverter;

#[derive(Parser, Debug)]
#[command(author, version, about = "한국어 문장을 KSL 글로스(JSON)로 변환")]
struct Cli {
    /// 내장 사전을 확장할 JSON 사전 파일
    #[arg(long, value_name = "FILE")]
    dict: Option<PathBuf>,

    /// 입력 최대 길이 (문자 수). 넘으면 원문 그대로 출력
    #[arg(long, value_name = "N")]
    max_chars: Option<usize>,

    /// 변환할 문장 (없으면 표준 입력)
    texts: Vec<String>,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = load_config();
    if let Some(dict) = cli.dict {
        config.dictionary_path = Some(dict.to_string_lossy().into_owned());
    }
    if cli.max_chars.is_some() {
        config.max_input_chars = cli.max_chars;
    }

    let converter = match KslConverter::from_config(&config) {
        Ok(converter) => converter,
        Err(e) => {
            log::error!("변환기 초기화 실패: {}", e);
            eprintln!("변환기 초기화 실패: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("표준 입력 읽기 실패: {}", e);
                    process::exit(1);
                }
            };
            print_result(&mut out, &converter, &line);
        }
    } else {
        for text in &cli.texts {
            print_result(&mut out, &converter, text);
        }
    }
}

fn print_result(out: &mut impl Write, converter: &KslConverter, text: &str) {
    let result = converter.convert(text);
    match serde_json::to_string(&result) {
        Ok(json) => {
            if let Err(e) = writeln!(out, "{}", json) {
                log::error!("출력 실패: {}", e);
                process::exit(1);
            }
        }
        Err(e) => log::error!("결과 직렬화 실패: {}", e),
    }
}
