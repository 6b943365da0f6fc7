fn main() {
    portfolio_ui::init_page();
}
