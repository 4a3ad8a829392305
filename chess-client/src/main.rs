use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use chess_client::game::{parse_input, ClientSession, InputError, SessionOutput};
use chess_client::settings::{BoardFlip, ClientSettings};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let mut stored = ClientSettings::load();
    let mut settings = stored.clone();
    apply_args(&mut settings, std::env::args().skip(1))?;
    let initial_flip = settings.board_flip;

    // 初始化日志，RUST_LOG 优先于设置文件
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_directive()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    info!("12x12 国际象棋客户端启动");

    let mut session = ClientSession::new(settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.render())?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("读取输入失败")?;

        match parse_input(&line) {
            Ok(event) => match session.handle_event(event)? {
                SessionOutput::Redraw => writeln!(stdout, "{}", session.render())?,
                SessionOutput::Text(text) => writeln!(stdout, "{}", text)?,
                SessionOutput::Quit => break,
            },
            Err(InputError::Empty) => {}
            Err(e) => writeln!(stdout, "{}（输入 help 查看命令）", e)?,
        }
        prompt(&mut stdout)?;
    }

    // 只持久化会话中改变的视角，命令行参数不写回
    if session.settings().board_flip != initial_flip {
        stored.board_flip = session.settings().board_flip;
        if let Err(e) = stored.save() {
            warn!("保存设置失败: {:#}", e);
        }
    }
    info!("客户端退出");
    Ok(())
}

/// 命令行参数覆盖设置：`--seed <u64>`、`--flip`
fn apply_args(settings: &mut ClientSettings, mut args: impl Iterator<Item = String>) -> Result<()> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed 需要一个数值")?;
                let seed = value
                    .parse::<u64>()
                    .with_context(|| format!("无效的种子: {}", value))?;
                settings.seed = Some(seed);
            }
            "--flip" => settings.board_flip = BoardFlip::Flipped,
            other => bail!("未知参数: {}", other),
        }
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
