use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::{
    level::{wall::TextureIndex, Geometry, ObjectSummary, ScriptSummary},
    number::Number,
};

macro_rules! metrics {
    ($($kind:ident => $key:literal, $label:literal;)*) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum MetricKind {
            $($kind,)*
        }

        impl MetricKind {
            /// Every metric, in report order.
            pub const ALL: &'static [MetricKind] = &[
                $(MetricKind::$kind,)*
            ];

            pub fn key(self) -> &'static str {
                match self {
                    $(MetricKind::$kind => $key,)*
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(MetricKind::$kind => $label,)*
                }
            }
        }
    };
}

metrics! {
    SectorCount => "sectors", "Number of sectors";
    WallCount => "walls", "Total number of walls";
    TextureCount => "textures", "Total number of textures";
    MaxSectorWalls => "max_sector_walls", "Max. number of walls in a sector";
    MeanSectorWalls => "mean_sector_walls", "Avg. number of walls per sector";
    MeanAmbientLight => "mean_ambient_light", "Avg. lighting across level";
    HighestCeiling => "highest_ceiling", "Highest ceiling";
    LowestFloor => "lowest_floor", "Lowest floor";
    MeanFloorAltitude => "mean_floor_altitude", "Avg. floor alt";
    MeanCeilingAltitude => "mean_ceiling_altitude", "Avg. ceiling alt";
    TallestRoom => "tallest_room", "Tallest room height";
    ShortestRoom => "shortest_room", "Shortest room height";
    MeanRoomHeight => "mean_room_height", "Avg. room height";
    FloorTexture => "floor_texture", "Most common floor texture";
    CeilingTexture => "ceiling_texture", "Most common ceiling texture";
    SignShare => "sign_share", "Share of walls having a sign";
    ScriptEntries => "inf_entries", "Number of INF entries";
    Elevators => "inf_elevators", "Number of INF elevators";
    ElevatorStops => "inf_stops", "Number of INF elevator stops";
    MeanStopsPerElevator => "mean_stops_per_elevator", "Avg. stops per elevator";
    Triggers => "inf_triggers", "Number of INF triggers";
    ScriptEntriesPerSector => "inf_entries_per_sector", "INF entries per sector";
    Objects => "objects", "Number of objects";
    Sprites => "sprites", "Number of sprites";
    Frames => "frames", "Number of frames";
    MeanObjectsPerSector => "mean_objects_per_sector", "Avg. objects per sector";
    MaxSectorObjects => "max_sector_objects", "Most objects in a single sector";
    VertexCount => "vertices", "Total number of vertices";
    LayerCount => "layers", "Number of layers";
}

/// The most used texture among sector floors or ceilings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextureUsage {
    pub index: TextureIndex,
    /// `None` if `index` is past the end of the texture list
    pub name: Option<String>,
    pub sectors: usize,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Number(Number),
    Texture(TextureUsage),
    /// Nothing to compute from: an empty set, or a ratio over zero
    Undefined,
}

impl Value {
    pub fn number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl<N: Into<Number>> From<Option<N>> for Value {
    fn from(value: Option<N>) -> Self {
        value.map_or(Value::Undefined, |n| Value::Number(n.into()))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Texture(TextureUsage {
                name: Some(name),
                sectors,
                ..
            }) => write!(f, "{name} (in {sectors} sectors)"),
            Value::Texture(TextureUsage {
                index,
                name: None,
                sectors,
            }) => write!(f, "#{index} (undefined) (in {sectors} sectors)"),
            Value::Undefined => write!(f, "N/A"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: Value,
}

impl Metric {
    pub fn new(kind: MetricKind, value: impl Into<Value>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.value)
    }
}

/// Labelled metrics over one level, in the order of [`MetricKind::ALL`].
#[derive(Clone, PartialEq, Debug)]
pub struct Statistics {
    metrics: Vec<Metric>,
}

impl Statistics {
    pub fn compute(geometry: &Geometry, script: &ScriptSummary, objects: &ObjectSummary) -> Self {
        use MetricKind::*;

        let sectors = &geometry.sectors;
        let walls = &geometry.walls;

        let floors = || sectors.iter().filter_map(|s| s.floor_altitude);
        let ceilings = || sectors.iter().filter_map(|s| s.ceiling_altitude);
        let heights = || sectors.iter().filter_map(|s| s.room_height());

        let (shortest, tallest) = heights()
            .minmax_by(f64::total_cmp)
            .into_option()
            .unzip();

        let mut metrics = vec![
            Metric::new(SectorCount, Some(sectors.len())),
            Metric::new(WallCount, Some(walls.len())),
            Metric::new(TextureCount, Some(geometry.textures.len())),
            Metric::new(MaxSectorWalls, sectors.iter().map(|s| s.wall_count).max()),
            Metric::new(
                MeanSectorWalls,
                mean(sectors.iter().map(|s| s.wall_count as f64)),
            ),
            Metric::new(
                MeanAmbientLight,
                mean(sectors.iter().filter_map(|s| s.ambient_light).map(f64::from)),
            ),
            Metric::new(HighestCeiling, ceilings().max_by(f64::total_cmp)),
            Metric::new(LowestFloor, floors().min_by(f64::total_cmp)),
            Metric::new(MeanFloorAltitude, mean(floors())),
            Metric::new(MeanCeilingAltitude, mean(ceilings())),
            Metric::new(TallestRoom, tallest),
            Metric::new(ShortestRoom, shortest),
            Metric::new(MeanRoomHeight, mean(heights())),
        ];

        metrics.push(Metric::new(
            FloorTexture,
            texture_mode(geometry, sectors.iter().filter_map(|s| s.floor_texture)),
        ));
        metrics.push(Metric::new(
            CeilingTexture,
            texture_mode(geometry, sectors.iter().filter_map(|s| s.ceiling_texture)),
        ));
        metrics.push(Metric::new(
            SignShare,
            ratio(walls.iter().filter(|w| w.has_sign()).count(), walls.len()),
        ));

        metrics.extend([
            Metric::new(ScriptEntries, Some(script.class_count)),
            Metric::new(Elevators, Some(script.elevator_count)),
            Metric::new(ElevatorStops, Some(script.stop_count)),
            Metric::new(
                MeanStopsPerElevator,
                ratio(script.stop_count, script.elevator_count),
            ),
            Metric::new(Triggers, Some(script.trigger_count)),
            Metric::new(
                ScriptEntriesPerSector,
                ratio(script.class_count, sectors.len()),
            ),
        ]);

        metrics.extend([
            Metric::new(Objects, Some(objects.object_count)),
            Metric::new(Sprites, Some(objects.sprite_count)),
            Metric::new(Frames, Some(objects.frame_count)),
            Metric::new(
                MeanObjectsPerSector,
                ratio(objects.object_count, sectors.len()),
            ),
            Metric::new(
                MaxSectorObjects,
                objects.sector_objects.values().copied().max(),
            ),
        ]);

        metrics.extend([
            Metric::new(
                VertexCount,
                Some(sectors.iter().map(|s| s.vertex_count).sum::<usize>()),
            ),
            Metric::new(
                LayerCount,
                Some(sectors.iter().filter_map(|s| s.layer).unique().count()),
            ),
        ]);

        Self { metrics }
    }

    pub fn get(&self, kind: MetricKind) -> Option<&Value> {
        self.metrics
            .iter()
            .find(|metric| metric.kind == kind)
            .map(|metric| &metric.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Metric> {
        self.metrics.iter()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// Ties go to the highest index.
fn texture_mode(
    geometry: &Geometry,
    indices: impl Iterator<Item = TextureIndex>,
) -> Value {
    indices
        .counts()
        .into_iter()
        .max_by_key(|&(index, sectors)| (sectors, index))
        .map_or(Value::Undefined, |(index, sectors)| {
            Value::Texture(TextureUsage {
                index,
                name: geometry.texture_name(index).map(str::to_owned),
                sectors,
            })
        })
}
