use chart::{LineChart, LineScene, Polyline, Tick};
use model::{Series, ValueDomain};
use yew::prelude::*;

use super::{
    plot_transform, view_box, GRID_COLOR, PLOT_HEIGHT, PLOT_WIDTH, PRIMARY_COLOR, SECONDARY_COLOR,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub historical: Series,
    #[prop_or_default]
    pub forecast: Option<Series>,
    pub domain: ValueDomain,
    #[prop_or_default]
    pub unit: String,
}

/// Line chart card: solid historical series, dashed forecast series with
/// hollow markers, and a dashed bridge segment between the two.
#[function_component(LineChartView)]
pub fn line_chart_view(props: &Props) -> Html {
    let input = LineChart {
        historical: &props.historical,
        forecast: props.forecast.as_ref(),
        domain: props.domain,
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
        unit: &props.unit,
    };

    let scene = match input.scene() {
        Ok(scene) => scene,
        Err(err) => {
            log::warn!("cannot lay out line chart '{}': {}", props.title, err);
            return html! {};
        }
    };

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4">
            <h3 class="text-sm font-semibold mb-2">{ &props.title }</h3>
            <svg viewBox={view_box()} class="w-full">
                <g transform={plot_transform()}>
                    { axes(&scene) }
                    { for scene.y_ticks.iter().map(y_tick) }
                    { for scene.x_ticks.iter().map(|t| x_tick(t, scene.height)) }
                    { bridge(&scene) }
                    { scene.historical.as_ref().map(|l| polyline(l, PRIMARY_COLOR)).unwrap_or_default() }
                    { scene.forecast.as_ref().map(|l| polyline(l, SECONDARY_COLOR)).unwrap_or_default() }
                </g>
            </svg>
            if scene.show_legend {
                { legend() }
            }
        </div>
    }
}

fn axes(scene: &LineScene) -> Html {
    html! {
        <>
            <line
                x1="0" y1={fmt(scene.height)} x2={fmt(scene.width)} y2={fmt(scene.height)}
                stroke={GRID_COLOR} stroke-width="1"
            />
            <line x1="0" y1="0" x2="0" y2={fmt(scene.height)} stroke={GRID_COLOR} stroke-width="1" />
        </>
    }
}

fn x_tick(tick: &Tick, height: f64) -> Html {
    html! {
        <>
            <line
                x1={fmt(tick.pos)} y1={fmt(height)} x2={fmt(tick.pos)} y2={fmt(height + 5.0)}
                stroke={GRID_COLOR} stroke-width="1"
            />
            <text
                x={fmt(tick.pos)} y={fmt(height + 18.0)}
                text-anchor="middle" class="text-[10px] fill-gray-500"
            >
                { tick.label.clone() }
            </text>
        </>
    }
}

fn y_tick(tick: &Tick) -> Html {
    html! {
        <>
            <line
                x1="0" y1={fmt(tick.pos)} x2={fmt(f64::from(PLOT_WIDTH))} y2={fmt(tick.pos)}
                stroke={GRID_COLOR} stroke-width="0.5" stroke-dasharray="2 4"
            />
            <text
                x="-8" y={fmt(tick.pos + 3.0)}
                text-anchor="end" class="text-[10px] fill-gray-500"
            >
                { tick.label.clone() }
            </text>
        </>
    }
}

fn bridge(scene: &LineScene) -> Html {
    let Some((from, to)) = scene.bridge else {
        return html! {};
    };
    html! {
        <line
            x1={fmt(from.x)} y1={fmt(from.y)} x2={fmt(to.x)} y2={fmt(to.y)}
            stroke={SECONDARY_COLOR} stroke-width="2" stroke-dasharray="5 5"
        />
    }
}

fn polyline(line: &Polyline, color: &'static str) -> Html {
    // Forecast markers are hollow, historical ones filled.
    let fill = if line.dashed { "white" } else { color };
    let dash = line.dashed.then_some("5 5");
    html! {
        <>
            <path
                d={line.path.clone()} fill="none"
                stroke={color} stroke-width="2" stroke-dasharray={dash}
            />
            { for line.markers.iter().map(|p| html! {
                <circle
                    cx={fmt(p.x)} cy={fmt(p.y)} r="3"
                    fill={fill} stroke={color} stroke-width="1.5"
                />
            }) }
        </>
    }
}

fn legend() -> Html {
    html! {
        <div class="flex gap-4 mt-2 text-xs text-gray-500 dark:text-gray-400">
            <span class="flex items-center gap-1">
                <span class="inline-block w-4 h-0.5" style={format!("background: {PRIMARY_COLOR}")}></span>
                { "Historical" }
            </span>
            <span class="flex items-center gap-1">
                <span class="inline-block w-4 border-t-2 border-dashed" style={format!("border-color: {SECONDARY_COLOR}")}></span>
                { "Forecast" }
            </span>
        </div>
    }
}

fn fmt(value: f64) -> String {
    format!("{value:.2}")
}
