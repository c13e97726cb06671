mod app;
mod effects;
mod images;
mod input;
mod logging;
mod persistence;
mod render;

fn main() -> anyhow::Result<()> {
    app::run()
}
