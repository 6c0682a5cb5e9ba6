//! Fixed in-memory fixtures for mock mode.
//!
//! Fixtures are plain JSON values, not pre-built entities. They pass through
//! the same schema gate as remote payloads, so a drifting fixture fails the
//! same way a drifting upstream would.

use serde_json::{json, Value};

pub fn event() -> Value {
    json!({
        "id": "evt-aurora-01",
        "name": "Aurora Nights",
        "description": "An evening of ambient sets under the aurora dome, closing with a spatial audio showcase.",
        "startTime": "2026-09-18T19:00:00Z",
        "endTime": "2026-09-18T22:00:00Z",
        "groupId": "grp-midnight-circuit",
        "zoneId": "zone-neon-7",
        "venueCoordinates": { "x": 12.5, "y": 0.0, "z": -4.25 },
        "ticketPrice": 25.0,
    })
}

pub fn stages() -> Value {
    json!([
        {
            "id": "stage-main",
            "name": "Aurora Dome",
            "venueModuleId": "module-atrium",
            "zoneId": "zone-neon-7",
            "streamType": "spatial",
            "deepLink": "https://app.hubzz.com/join?zone=zone-neon-7&venue=module-atrium&x=12.5&y=0&z=-4.25",
            "venueCoordinates": { "x": 12.5, "y": 0.0, "z": -4.25 },
            "priority": 1,
        },
        {
            "id": "stage-skybox",
            "name": "Skybox Balcony",
            "venueModuleId": "module-skybox",
            "zoneId": "zone-neon-7",
            "streamType": "external",
            "externalStreamUrl": "https://player.twitch.tv/?channel=midnightcircuit",
            "deepLink": "https://app.hubzz.com/join?zone=zone-neon-7&venue=module-skybox&x=0&y=18&z=6.5",
            "venueCoordinates": { "x": 0.0, "y": 18.0, "z": 6.5 },
            "priority": 2,
        },
    ])
}

pub fn stream_queue() -> Value {
    json!({
        "eventId": "evt-aurora-01",
        "activeStreamIndex": 0,
        "streams": [
            {
                "platform": "twitch",
                "channelId": "midnightcircuit",
                "embedUrl": "https://player.twitch.tv/?channel=midnightcircuit",
                "priority": 1,
            },
            {
                "platform": "youtube",
                "channelId": "UCmidnightcircuit",
                "embedUrl": "https://www.youtube.com/embed/live_stream?channel=UCmidnightcircuit",
                "priority": 2,
            },
        ],
    })
}

pub fn drop_in_session() -> Value {
    json!({
        "id": "drop-in-atrium",
        "locationLabel": "Atrium backstage",
        "roomName": "Green Room",
        "participants": [
            {
                "id": "usr-ava",
                "name": "Ava Linden",
                "avatarUrl": "https://cdn.hubzz.com/avatars/ava-linden.png",
                "role": "Resident DJ",
                "isHost": true,
                "isMuted": false,
                "isSpeaking": true,
            },
            {
                "id": "usr-kai",
                "name": "Kai Moreno",
                "avatarUrl": "https://cdn.hubzz.com/avatars/kai-moreno.png",
                "role": "Lighting",
                "isHost": false,
                "isMuted": true,
                "isSpeaking": false,
            },
            {
                "id": "usr-ren",
                "name": "Ren Ito",
                "isMuted": false,
                "isSpeaking": false,
            },
        ],
    })
}

pub fn group_members() -> Value {
    json!([
        {
            "id": "usr-ava",
            "username": "ava.linden",
            "avatarUrl": "https://cdn.hubzz.com/avatars/ava-linden.png",
            "role": "owner",
        },
        {
            "id": "usr-kai",
            "username": "kai.moreno",
            "avatarUrl": "https://cdn.hubzz.com/avatars/kai-moreno.png",
            "role": "admin",
        },
        {
            "id": "usr-ren",
            "username": "ren.ito",
            "role": "member",
        },
    ])
}

pub fn tickets() -> Value {
    json!([
        {
            "id": "tkt-0091",
            "eventId": "evt-aurora-01",
            "eventName": "Aurora Nights",
            "venueName": "The Aurora Dome",
            "hostName": "Midnight Circuit",
            "zoneId": "zone-neon-7",
            "venueModuleId": "module-atrium",
            "startTime": "2026-09-18T19:00:00Z",
            "endTime": "2026-09-18T22:00:00Z",
            "canJoinAt": "2026-09-18T18:45:00Z",
            "issuedAt": "2026-08-01T10:12:00Z",
            "ticketNumber": "A-0091",
            "status": "upcoming",
            "deepLink": "https://app.hubzz.com/join?zone=zone-neon-7&venue=module-atrium&x=12.5&y=0&z=-4.25",
        },
        {
            "id": "tkt-0088",
            "eventId": "evt-basement-12",
            "eventName": "Basement Frequencies",
            "venueName": "Substation K",
            "hostName": "Low End Theory Club",
            "zoneId": "zone-rust-2",
            "venueModuleId": "module-substation",
            "startTime": "2026-08-07T18:00:00Z",
            "endTime": "2026-08-08T02:00:00Z",
            "issuedAt": "2026-07-29T08:40:00Z",
            "ticketNumber": "K-0088",
            "status": "live",
            "deepLink": "https://app.hubzz.com/join?zone=zone-rust-2&venue=module-substation&x=-3&y=0&z=9.75",
            "isCurrent": true,
        },
        {
            "id": "tkt-0074",
            "eventId": "evt-velvet-07",
            "eventName": "Velvet Frequencies",
            "venueName": "Velvet Hall",
            "hostName": "Midnight Circuit",
            "zoneId": "zone-neon-7",
            "venueModuleId": "module-velvet",
            "startTime": "2026-06-02T20:00:00Z",
            "endTime": "2026-06-02T23:00:00Z",
            "issuedAt": "2026-05-20T12:00:00Z",
            "ticketNumber": "A-0074",
            "status": "stub",
            "deepLink": "https://app.hubzz.com/join?zone=zone-neon-7&venue=module-velvet&x=4&y=0&z=1.5",
            "stubId": "stub-001",
        },
    ])
}

pub fn stubs() -> Value {
    json!([
        {
            "id": "stub-001",
            "ticketId": "tkt-0074",
            "ticketNumber": "A-0074",
            "eventName": "Velvet Frequencies",
            "description": "A night of downtempo in the velvet hall, closed by a surprise b2b set.",
            "venueName": "Velvet Hall",
            "venueImageUrl": "https://cdn.hubzz.com/venues/velvet-hall.jpg",
            "hostName": "Midnight Circuit",
            "startTime": "2026-06-02T20:00:00Z",
            "endTime": "2026-06-02T23:00:00Z",
            "zoneId": "zone-neon-7",
            "venueModuleId": "module-velvet",
            "replayUrl": "https://cdn.hubzz.com/replays/velvet-frequencies.m3u8",
            "hostedBy": [
                {
                    "id": "usr-ava",
                    "name": "Ava Linden",
                    "avatarUrl": "https://cdn.hubzz.com/avatars/ava-linden.png",
                    "role": "Resident DJ",
                },
            ],
            "guests": [
                {
                    "id": "usr-kai",
                    "name": "Kai Moreno",
                    "avatarUrl": "https://cdn.hubzz.com/avatars/kai-moreno.png",
                    "durationMinutes": 174,
                    "attendeeNumber": 18,
                },
                {
                    "id": "usr-ren",
                    "name": "Ren Ito",
                    "durationMinutes": 95,
                    "attendeeNumber": 233,
                },
            ],
            "guestCount": 412,
            "stubCode": "VELVET-7F3K",
        },
    ])
}

/// Looks a stub up by id, like the remote endpoint would.
pub fn stub(stub_id: &str) -> Option<Value> {
    let Value::Array(stubs) = stubs() else {
        return None;
    };

    stubs
        .into_iter()
        .find(|stub| stub.get("id").and_then(Value::as_str) == Some(stub_id))
}

pub fn group_profile() -> Value {
    json!({
        "id": "grp-midnight-circuit",
        "name": "Midnight Circuit",
        "description": "A collective hosting late-night ambient and downtempo events across the neon district.",
        "category": "Music collective",
        "coverImageUrl": "https://cdn.hubzz.com/groups/midnight-circuit/cover.jpg",
        "avatarUrl": "https://cdn.hubzz.com/groups/midnight-circuit/avatar.png",
        "followerLabel": "12.4k followers",
        "isFollowed": true,
        "stubCount": 38,
        "badgeLabel": "Verified host",
        "events": [
            {
                "id": "evt-aurora-01",
                "name": "Aurora Nights",
                "startTime": "2026-09-18T19:00:00Z",
                "endTime": "2026-09-18T22:00:00Z",
                "hostName": "Midnight Circuit",
                "status": "upcoming",
                "imageUrl": "https://cdn.hubzz.com/events/aurora-nights.jpg",
                "attendeeCount": 180,
                "capacity": 500,
                "isFree": false,
                "rsvpLabel": "Going",
                "ctaLabel": "Get ticket",
                "ctaHref": "/event/evt-aurora-01",
            },
            {
                "id": "evt-velvet-07",
                "name": "Velvet Frequencies",
                "startTime": "2026-06-02T20:00:00Z",
                "endTime": "2026-06-02T23:00:00Z",
                "hostName": "Midnight Circuit",
                "status": "ended",
                "imageUrl": "https://cdn.hubzz.com/events/velvet-frequencies.jpg",
                "attendeeCount": 412,
            },
        ],
        "merch": [
            {
                "id": "mrc-aurora-tee",
                "name": "Aurora Tour Tee",
                "subtitle": "Glow print, limited run",
                "priceHbc": 140.0,
                "imageUrl": "https://cdn.hubzz.com/merch/aurora-tee.png",
                "supplyLabel": "84 of 250 left",
            },
            {
                "id": "mrc-velvet-poster",
                "name": "Velvet Frequencies Poster",
                "priceHbc": 60.0,
                "stubCost": 2,
                "requiredStubs": 2,
                "ownedStubs": 1,
                "imageUrl": "https://cdn.hubzz.com/merch/velvet-poster.png",
                "unlockNote": "Unlocks with 2 Velvet stubs",
            },
        ],
        "members": group_members(),
    })
}

pub fn notifications() -> Value {
    json!([
        {
            "id": "ntf-301",
            "type": "event",
            "title": "Aurora Nights starts soon",
            "message": "Doors to the Aurora Dome open 15 minutes before the first set.",
            "ctaLabel": "View ticket",
            "ctaHref": "/tickets",
            "createdAt": "2026-08-06T09:00:00Z",
            "avatarUrl": "https://cdn.hubzz.com/groups/midnight-circuit/avatar.png",
        },
        {
            "id": "ntf-302",
            "type": "friend-request",
            "title": "New friend request",
            "message": "Kai Moreno wants to connect.",
            "ctaLabel": "Respond",
            "ctaHref": "/friends/requests",
            "createdAt": "2026-08-05T16:20:00Z",
            "avatarUrl": "https://cdn.hubzz.com/avatars/kai-moreno.png",
        },
        {
            "id": "ntf-303",
            "type": "system",
            "title": "Stub issued",
            "message": "Your stub for Velvet Frequencies is ready to view.",
            "createdAt": "2026-06-03T00:15:00Z",
        },
    ])
}
