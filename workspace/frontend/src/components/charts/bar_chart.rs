use chart::{BarChart, BarItem, BarRect, Tick};
use model::ValueDomain;
use yew::prelude::*;

use super::{plot_transform, view_box, BAR_COLOR, GRID_COLOR, PLOT_HEIGHT, PLOT_WIDTH};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub items: Vec<BarItem>,
    pub domain: ValueDomain,
    #[prop_or_default]
    pub unit: String,
}

/// Bar chart card for labeled values, one slot per item.
#[function_component(BarChartView)]
pub fn bar_chart_view(props: &Props) -> Html {
    let input = BarChart {
        items: &props.items,
        domain: props.domain,
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
        unit: &props.unit,
    };

    let scene = match input.scene() {
        Ok(scene) => scene,
        Err(err) => {
            log::warn!("cannot lay out bar chart '{}': {}", props.title, err);
            return html! {};
        }
    };

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4">
            <h3 class="text-sm font-semibold mb-2">{ &props.title }</h3>
            <svg viewBox={view_box()} class="w-full">
                <g transform={plot_transform()}>
                    <line
                        x1="0" y1={fmt(scene.height)} x2={fmt(scene.width)} y2={fmt(scene.height)}
                        stroke={GRID_COLOR} stroke-width="1"
                    />
                    { for scene.y_ticks.iter().map(y_tick) }
                    { for scene.bars.iter().map(|b| bar(b, scene.height, &props.unit)) }
                </g>
            </svg>
        </div>
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

fn bar(bar: &BarRect, plot_height: f64, unit: &str) -> Html {
    let center = bar.x + bar.width / 2.0;
    html! {
        <>
            <rect
                x={fmt(bar.x)} y={fmt(bar.y)}
                width={fmt(bar.width)} height={fmt(bar.height)}
                fill={BAR_COLOR} rx="2"
            />
            <text
                x={fmt(center)} y={fmt(bar.y - 5.0)}
                text-anchor="middle" class="text-[10px] fill-gray-500"
            >
                { format!("{:.1}{unit}", bar.value) }
            </text>
            <text
                x={fmt(center)} y={fmt(plot_height + 18.0)}
                text-anchor="middle" class="text-[10px] fill-gray-500"
            >
                { bar.label.clone() }
            </text>
        </>
    }
}

fn fmt(value: f64) -> String {
    format!("{value:.2}")
}
