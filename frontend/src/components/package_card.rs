use yew::prelude::*;
use yew_router::prelude::*;

use shared::{format_money, Package};

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PackageCardProps {
    pub package: Package,
}

#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let package = &props.package;

    html! {
        <div class="package-card">
            <img src={package.image_url.clone()} alt={package.title.clone()} />
            <div class="package-card-body">
                <h2>{&package.title}</h2>
                <p class="package-description">{&package.description}</p>
                <div class="package-card-footer">
                    <span class="package-price">
                        {format!("{} per person", format_money(package.price))}
                    </span>
                    <Link<Route>
                        classes="btn btn-primary"
                        to={Route::PackageDetails { id: package.id.clone() }}
                    >
                        {"View Details"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
