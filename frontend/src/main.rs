use meridian_web::App;

fn main() {
    gloo_console::log!("Starting Meridian Freight site");
    yew::Renderer::<App>::new().render();
}
