use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use log::error;

use crate::codec::QueryCodec;
use crate::domain::query::QueryMap;
use crate::dto::listing::{ListingPage, RatingConfig};
use crate::forms::listing::FilterChangeForm;
use crate::repository::SharedProductReader;
use crate::services::ServiceError;
use crate::services::listing::{FilterChange, FilterController, ListingSettings};
use crate::services::navigation::RecordingNavigator;

type Controller = FilterController<Arc<SharedProductReader>, RecordingNavigator>;

fn controller(
    products: web::Data<SharedProductReader>,
    codec: &QueryCodec,
    settings: &ListingSettings,
) -> Controller {
    FilterController::new(
        codec.clone(),
        products.into_inner(),
        RecordingNavigator::default(),
        settings.clone(),
    )
}

/// Mounts the listing at `path` and the filter form at `{path}/filter`.
pub fn configure(cfg: &mut web::ServiceConfig, path: &str) {
    cfg.route(path, web::get().to(show_listing))
        .route(&format!("{path}/filter"), web::post().to(change_filter));
}

pub async fn show_listing(
    req: HttpRequest,
    products: web::Data<SharedProductReader>,
    codec: web::Data<QueryCodec>,
    settings: web::Data<ListingSettings>,
    rating: web::Data<RatingConfig>,
) -> impl Responder {
    let query = QueryMap::from_query_string(req.query_string());
    let mut controller = controller(products, &codec, &settings);

    let outcome = controller.on_query_changed(&query);
    let page = ListingPage {
        listing: controller.listing_view(),
        rating: *rating.get_ref(),
    };

    match outcome {
        Ok(()) => HttpResponse::Ok().json(page),
        Err(err) => {
            error!("Failed to load listing: {err}");
            HttpResponse::BadGateway().json(page)
        }
    }
}

pub async fn change_filter(
    products: web::Data<SharedProductReader>,
    codec: web::Data<QueryCodec>,
    settings: web::Data<ListingSettings>,
    web::Form(form): web::Form<FilterChangeForm>,
) -> impl Responder {
    let change = match FilterChange::try_from(&form) {
        Ok(change) => change,
        Err(err) => {
            error!("Failed to read filter change: {err}");
            return HttpResponse::BadRequest().body(err.to_string());
        }
    };

    let mut controller = controller(products, &codec, &settings);
    controller.load_query(&QueryMap::from_query_string(&form.current));

    match controller.request_filter_change(change) {
        Ok(()) => match controller.navigator().last() {
            Some(target) => super::redirect(&target.to_url()),
            None => HttpResponse::InternalServerError().finish(),
        },
        Err(err @ ServiceError::UnknownFilter(_)) => HttpResponse::BadRequest().body(err.to_string()),
        Err(err) => {
            error!("Failed to change filters: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
