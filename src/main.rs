use druid::AppLauncher;
use druid::WindowDesc;
use regression_playground::config::Config;
use regression_playground::error::AppError;
use regression_playground::plot_editor::build_toplevel_widget;
use regression_playground::plot_editor::window_size;
use regression_playground::plot_editor::PlotData;

fn main() -> Result<(), AppError> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(config.log_level))
        .with_target(false)
        .init();

    let window = WindowDesc::new(build_toplevel_widget(&config.title))
        .title(config.title.clone())
        .window_size(window_size())
        .resizable(false);
    AppLauncher::with_window(window).launch(PlotData::default())?;

    Ok(())
}
