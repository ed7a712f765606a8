// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::log::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{
    Layer, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Shared `fmt` layer settings for every writer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_names(false)
    };
}

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

pub type Layers = Vec<Box<DynLayer<tracing_subscriber::Registry>>>;

impl TracingConfig {
    /// Installs the subscriber for the whole process. Fails if one is already set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The log file can't be opened
    /// - A global subscriber is already installed
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(&self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Installs the subscriber for the current thread until the guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be opened.
    pub fn install_thread_local(
        self,
    ) -> miette::Result<tracing::subscriber::DefaultGuard> {
        let layers = try_create_layers(&self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

/// Returns the layers without installing them. The first layer is always the level
/// filter.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_layers(tracing_config: &TracingConfig) -> miette::Result<Layers> {
    let mut acc: Layers = vec![Box::new(tracing_config.level_filter)];

    if let Some(layer) = try_create_display_layer(
        tracing_config.level_filter,
        &tracing_config.writer_config,
    )? {
        acc.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(tracing_config.level_filter, &tracing_config.writer_config)?
    {
        acc.push(layer);
    }

    Ok(acc)
}

/// # Errors
///
/// Never fails today. The `Result` keeps the same shape as [`try_create_file_layer`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// # Errors
///
/// Returns an error if the log file can't be opened. See
/// [`rolling_file_appender_impl::try_create`].
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
            let file = rolling_file_appender_impl::try_create(path)?;
            Some(Box::new(fmt_layer.with_writer(file).with_filter(level_filter)))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
