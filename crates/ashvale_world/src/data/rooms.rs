//! The Ashen Vale room templates.

use crate::template::{RoomChain, RoomRole, RoomTemplate};

pub(crate) fn room_templates() -> Vec<RoomTemplate> {
    vec![
        RoomTemplate::new(
            "graysong-square",
            "Graysong Square",
            "Rain-slick stones surround the silent chapel bell.",
        )
        .with_item("ember-1")
        .with_actor("villager-ida")
        .with_trait("safe")
        .with_trait("hearth")
        .with_role(RoomRole::Hub)
        .in_chain(RoomChain::Hub),
        // Chapel
        RoomTemplate::new(
            "ember-chapel-nave",
            "Ember Chapel Nave",
            "Benches overturned; candles gutter in the draft.",
        )
        .with_item("ember-2")
        .with_actor("lantern-wisp-1")
        .with_trait("sanctified")
        .with_role(RoomRole::Entry)
        .in_chain(RoomChain::Chapel),
        RoomTemplate::new(
            "bell-tower",
            "Bell Tower",
            "The Great Bell hangs cracked; ropes fray in the night wind.",
        )
        .with_trait("objective")
        .in_chain(RoomChain::Chapel),
        RoomTemplate::new(
            "ember-chapel-crypt",
            "Chapel Crypt",
            "Stone coffers line the walls. Bone chimes sway softly.",
        )
        .with_item("simple-key-crypt")
        .with_actor("husk-1")
        .with_actor("husk-2")
        .with_trait("threat")
        .in_chain(RoomChain::Chapel),
        RoomTemplate::new(
            "ember-chapel-depths",
            "Crypt Depths",
            "A sealed iron gate leads to the bellwraith's haunt.",
        )
        .with_item("bell-shard-one")
        .with_actor("bellwraith")
        .with_trait("boss")
        .with_role(RoomRole::Boss)
        .in_chain(RoomChain::Chapel),
        // Well
        RoomTemplate::new(
            "witchwell-approach",
            "Witchwell Approach",
            "Mist curls around moss altars. Water whispers beneath.",
        )
        .with_actor("gloom-wolf-1")
        .with_trait("threat")
        .with_role(RoomRole::Entry)
        .in_chain(RoomChain::Well),
        RoomTemplate::new(
            "witchwell-pool",
            "Witchwell Pool",
            "Black water circles a stone wellmouth lit by foxfire.",
        )
        .with_item("bell-shard-two")
        .with_actor("well-mother")
        .with_trait("boss")
        .with_role(RoomRole::Boss)
        .in_chain(RoomChain::Well),
        // Monastery
        RoomTemplate::new(
            "hollow-monastery-gate",
            "Hollow Monastery Gate",
            "Cloister arches open onto a scriptoria of ash.",
        )
        .with_actor("chapel-guard-1")
        .with_role(RoomRole::Entry)
        .in_chain(RoomChain::Monastery),
        RoomTemplate::new(
            "hollow-monastery-cloister",
            "Ashen Cloister",
            "Charred scrolls flutter like moths beneath broken arches.",
        )
        .with_item("ember-3")
        .with_actor("bonebinder-1")
        .with_trait("threat")
        .in_chain(RoomChain::Monastery),
        RoomTemplate::new(
            "hollow-monastery-reliquary",
            "Reliquary Vault",
            "Silver reliquaries lie toppled; altar light flickers.",
        )
        .with_item("bell-shard-three")
        .with_actor("prior-of-ash")
        .with_trait("boss")
        .with_role(RoomRole::Boss)
        .in_chain(RoomChain::Monastery),
        // Orchard
        RoomTemplate::new(
            "orchard-path",
            "Blackroot Orchard",
            "Twisted apple trees drip with black sap.",
        )
        .with_item("ward-candle-2")
        .with_actor("gloom-wolf-2")
        .with_trait("threat")
        .with_role(RoomRole::Entry)
        .in_chain(RoomChain::Orchard),
        RoomTemplate::new(
            "orchard-heart",
            "Orchard Heart",
            "Roots knot around a pulsing blight at the grove's center.",
        )
        .with_item("bell-shard-four")
        .with_actor("orchard-heart")
        .with_trait("boss")
        .with_role(RoomRole::Boss)
        .in_chain(RoomChain::Orchard),
        // Road and village
        RoomTemplate::new(
            "old-road",
            "Old Road",
            "A mud road lined with guttering braziers heads into the dark.",
        )
        .with_actor("shambler-1")
        .with_trait("threat")
        .in_chain(RoomChain::Road),
        RoomTemplate::new(
            "mill-yard",
            "Mill Yard",
            "Abandoned sacks and a waterwheel creak in the dark rain.",
        )
        .with_actor("villager-bryn"),
        RoomTemplate::new(
            "mill-loft",
            "Mill Loft",
            "Dusty grain bins and a broken lantern overlook the yard.",
        )
        .with_item("ward-candle-1"),
        // Flavour
        RoomTemplate::new(
            "rain-market",
            "Rain Market",
            "Tarped stalls drip steadily; coins lie forgotten in puddles.",
        ),
        RoomTemplate::new(
            "charcoal-burn",
            "Charcoal Burn",
            "Smoldering mounds smoke beneath sod; the air tastes of cinder.",
        ),
        RoomTemplate::new(
            "sodden-stable",
            "Sodden Stable",
            "Empty stalls, slick straw; a halter swings in the draft.",
        ),
        RoomTemplate::new(
            "collapsed-bridge",
            "Collapsed Bridge",
            "A river runs black under broken stone and rope fronds.",
        ),
        RoomTemplate::new(
            "fog-lantern-pier",
            "Fog Lantern Pier",
            "Green lamps burn cold; tide-chimes clatter beneath the boards.",
        ),
        RoomTemplate::new(
            "ash-field",
            "Ash Field",
            "Wind combs pale furrows; black stubble pricks through frost.",
        ),
        RoomTemplate::new(
            "clay-pits",
            "Clay Pits",
            "Slick pits rimmed with footmarks; a shovel half-swallowed.",
        ),
        RoomTemplate::new(
            "moss-hall",
            "Moss Hall",
            "A ruined manor furred with moss; candle niches gone dark.",
        ),
        RoomTemplate::new(
            "weathered-shrine",
            "Weathered Shrine",
            "Offerings turned to pulp; a hollow idol weeps rainwater.",
        ),
        RoomTemplate::new(
            "fallow-terrace",
            "Fallow Terrace",
            "Terraced plots gone to weeds; scarecrows bow to the wind.",
        ),
    ]
}
