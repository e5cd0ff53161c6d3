use yew_sketch_calc::components::App;
use yew_sketch_calc::util;

fn main() {
    util::init_logging();
    log::info!("sketch calculator starting");
    yew::Renderer::<App>::new().render();
}
