use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("log file error")]
    File(#[from] data::logging::Error),
    #[error("logger error")]
    Log(#[from] log::SetLoggerError),
}

pub fn setup(is_debug: bool) -> Result<(), Error> {
    let mut logger = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}:{} -- {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ));
        })
        .level(log::LevelFilter::Off)
        .level_for("panic", log::LevelFilter::Error)
        .level_for("data", log::LevelFilter::Trace)
        .level_for("showcase", log::LevelFilter::Trace);

    if is_debug {
        // stdout carries the rendered page
        logger = logger.chain(std::io::stderr());
    } else {
        logger = logger.chain(data::logging::file()?);
    }

    logger.apply()?;
    Ok(())
}
