use std::f64::consts::PI;

use anyhow::{anyhow, bail, Result};
use leptos::{html::Canvas, HtmlElement};
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::data::geo::Coordinates;

const BACKGROUND_COLOR: &str = "#13171f";
const ROUTE_COLOR: &str = "#00b8ff";
const CHECKPOINT_COLOR: &str = "white";
const CURRENT_COLOR: &str = "#ff00c1";

const MIN_PADDING_DEG: f64 = 2.0;

pub struct RouteCanvas {
    ctx: CanvasRenderingContext2d,
}

impl RouteCanvas {
    pub fn try_new(node: &HtmlElement<Canvas>) -> Result<Self> {
        #[derive(serde::Serialize)]
        struct ContextOptions {
            alpha: bool,
        }

        let ctx = node
            .get_context_with_context_options(
                "2d",
                &serde_wasm_bindgen::to_value(&ContextOptions { alpha: false })
                    .map_err(|err| anyhow!("context options serialization error: {err}"))?,
            )
            .map_err(|err| anyhow!("{err:?}"))?;
        let Some(ctx) = ctx else {
            bail!("canvas' 2d context not found");
        };

        let ctx = ctx
            .dyn_into()
            .map_err(|err| anyhow!("context dyn conversion error: {err:?}"))?;

        Ok(Self { ctx })
    }

    pub fn render(
        &mut self,
        checkpoints: &[(Coordinates, String)],
        current: Coordinates,
        width: f64,
        height: f64,
        dpr: f64,
    ) {
        debug!(checkpoints = checkpoints.len(), "rendering route");

        if width < f64::EPSILON || height < f64::EPSILON {
            return;
        }

        self.ctx.save();
        if let Err(err) = self.ctx.scale(dpr, dpr) {
            error!(dpr, "context scaling failed: {err:?}");
        };
        self.ctx.set_font("12px Arial");
        self.ctx.set_fill_style(&BACKGROUND_COLOR.into());
        self.ctx.fill_rect(0.0, 0.0, width, height);

        let route = unwrap_longitudes(
            &checkpoints
                .iter()
                .map(|(coordinates, _)| *coordinates)
                .collect::<Vec<_>>(),
        );
        let current = align_longitude(current, &route);

        let Some(bounds) = Bounds::from_points(route.iter().chain(std::iter::once(&current)))
        else {
            self.ctx.restore();
            return;
        };

        self.render_route(&route, &bounds, width, height);
        self.render_checkpoints(&route, checkpoints, &bounds, width, height);
        self.render_current(current, &bounds, width, height);

        self.ctx.restore();
    }

    fn render_route(&mut self, route: &[Coordinates], bounds: &Bounds, width: f64, height: f64) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style(&ROUTE_COLOR.into());
        self.ctx.set_line_width(2.0);

        for point in route {
            let (x, y) = bounds.project(*point, width, height);
            self.ctx.line_to(x, y);
        }

        self.ctx.stroke();
    }

    fn render_checkpoints(
        &mut self,
        route: &[Coordinates],
        checkpoints: &[(Coordinates, String)],
        bounds: &Bounds,
        width: f64,
        height: f64,
    ) {
        self.ctx.set_fill_style(&CHECKPOINT_COLOR.into());

        for (point, (_, label)) in route.iter().zip(checkpoints) {
            let (x, y) = bounds.project(*point, width, height);

            self.ctx.begin_path();
            if let Err(err) = self.ctx.arc(x, y, 3.0, 0.0, 2.0 * PI) {
                error!("arc drawing error: {err:?}");
            }
            self.ctx.fill();

            if let Err(err) = self.ctx.fill_text(label, x + 6.0, y - 6.0) {
                error!("fill text error: {err:?}");
            }
        }
    }

    fn render_current(&mut self, current: Coordinates, bounds: &Bounds, width: f64, height: f64) {
        let (x, y) = bounds.project(current, width, height);

        self.ctx.set_fill_style(&CURRENT_COLOR.into());
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(x, y, 6.0, 0.0, 2.0 * PI) {
            error!("arc drawing error: {err:?}");
        }
        self.ctx.fill();
    }
}

/// Longitude/latitude box the route is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Padded box around the points, `None` when there are none
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Coordinates>) -> Option<Self> {
        let mut points = points.into_iter();
        let [lon, lat] = *points.next()?;

        let mut bounds = Self {
            min_lon: lon,
            max_lon: lon,
            min_lat: lat,
            max_lat: lat,
        };

        for [lon, lat] in points {
            bounds.min_lon = bounds.min_lon.min(*lon);
            bounds.max_lon = bounds.max_lon.max(*lon);
            bounds.min_lat = bounds.min_lat.min(*lat);
            bounds.max_lat = bounds.max_lat.max(*lat);
        }

        let lon_padding = ((bounds.max_lon - bounds.min_lon) * 0.1).max(MIN_PADDING_DEG);
        let lat_padding = ((bounds.max_lat - bounds.min_lat) * 0.1).max(MIN_PADDING_DEG);

        Some(Self {
            min_lon: bounds.min_lon - lon_padding,
            max_lon: bounds.max_lon + lon_padding,
            min_lat: bounds.min_lat - lat_padding,
            max_lat: bounds.max_lat + lat_padding,
        })
    }

    /// Equirectangular projection, north is up
    pub fn project(&self, [lon, lat]: Coordinates, width: f64, height: f64) -> (f64, f64) {
        let x = (lon - self.min_lon) / (self.max_lon - self.min_lon) * width;
        let y = height - (lat - self.min_lat) / (self.max_lat - self.min_lat) * height;
        (x, y)
    }
}

/// Shifts longitudes by whole turns so consecutive points never jump more than half a turn
pub fn unwrap_longitudes(points: &[Coordinates]) -> Vec<Coordinates> {
    let mut unwrapped: Vec<Coordinates> = Vec::with_capacity(points.len());

    for [lon, lat] in points {
        let lon = match unwrapped.last() {
            Some([previous, _]) => nearest_turn(*lon, *previous),
            None => *lon,
        };
        unwrapped.push([lon, *lat]);
    }

    unwrapped
}

/// Moves a point onto the same turn as an already unwrapped route
#[expect(clippy::cast_precision_loss)]
pub fn align_longitude([lon, lat]: Coordinates, route: &[Coordinates]) -> Coordinates {
    if route.is_empty() {
        return [lon, lat];
    }

    let center = route.iter().map(|[lon, _]| lon).sum::<f64>() / route.len() as f64;
    [nearest_turn(lon, center), lat]
}

fn nearest_turn(lon: f64, reference: f64) -> f64 {
    [lon - 360.0, lon, lon + 360.0]
        .into_iter()
        .min_by(|a, b| (a - reference).abs().total_cmp(&(b - reference).abs()))
        .unwrap_or(lon)
}

#[cfg(test)]
mod tests {
    use super::{align_longitude, unwrap_longitudes, Bounds};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bounds_are_padded() {
        let points = [[0.0, 0.0], [100.0, 50.0]];
        let bounds = Bounds::from_points(&points).unwrap();

        assert!(close(bounds.min_lon, -10.0));
        assert!(close(bounds.max_lon, 110.0));
        assert!(close(bounds.min_lat, -5.0));
        assert!(close(bounds.max_lat, 55.0));
    }

    #[test]
    fn single_point_gets_minimum_padding() {
        let bounds = Bounds::from_points(&[[13.405, 52.52]]).unwrap();

        assert!(close(bounds.max_lon - bounds.min_lon, 4.0));
        assert!(close(bounds.max_lat - bounds.min_lat, 4.0));
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn projection_maps_corners() {
        let bounds = Bounds {
            min_lon: -10.0,
            max_lon: 10.0,
            min_lat: 0.0,
            max_lat: 40.0,
        };

        let (x, y) = bounds.project([-10.0, 40.0], 200.0, 100.0);
        assert!(close(x, 0.0) && close(y, 0.0));

        let (x, y) = bounds.project([10.0, 0.0], 200.0, 100.0);
        assert!(close(x, 200.0) && close(y, 100.0));

        let (x, y) = bounds.project([0.0, 20.0], 200.0, 100.0);
        assert!(close(x, 100.0) && close(y, 50.0));
    }

    #[test]
    fn route_across_the_antimeridian_is_continuous() {
        let route = unwrap_longitudes(&[[121.4737, 31.2304], [-150.0, 30.0], [-74.006, 40.7128]]);

        assert!(close(route[0][0], 121.4737));
        assert!(close(route[1][0], 210.0));
        assert!(close(route[2][0], 285.994));
        assert!(route.windows(2).all(|pair| (pair[1][0] - pair[0][0]).abs() <= 180.0));
    }

    #[test]
    fn current_position_joins_the_route() {
        let route = [[121.4737, 31.2304], [285.994, 40.7128]];

        let [lon, lat] = align_longitude([-150.0, 30.0], &route);
        assert!(close(lon, 210.0));
        assert!(close(lat, 30.0));

        let [lon, _] = align_longitude([13.4, 52.5], &[]);
        assert!(close(lon, 13.4));
    }
}
