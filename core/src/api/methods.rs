// Generated from the youtubePartner v1 discovery document by
// `youtube-partner generate`. Edit the generator, not this file.

api_methods! {
    AssetLabels => asset_labels {
        /// Insert an asset label for an owner.
        insert => ASSET_LABELS_INSERT {
            id: "youtubePartner.assetLabels.insert",
            http: Post,
            path: "assetLabels",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Retrieves a list of all asset labels for an owner.
        list => ASSET_LABELS_LIST {
            id: "youtubePartner.assetLabels.list",
            http: Get,
            path: "assetLabels",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    AssetMatchPolicy => asset_match_policy {
        /// Retrieves the match policy assigned to the specified asset by the content owner associated with the authenticated user.
        get => ASSET_MATCH_POLICY_GET {
            id: "youtubePartner.assetMatchPolicy.get",
            http: Get,
            path: "assets/{assetId}/matchPolicy",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
        /// Updates the asset's match policy.
        patch => ASSET_MATCH_POLICY_PATCH {
            id: "youtubePartner.assetMatchPolicy.patch",
            http: Patch,
            path: "assets/{assetId}/matchPolicy",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
        /// Updates the asset's match policy.
        update => ASSET_MATCH_POLICY_UPDATE {
            id: "youtubePartner.assetMatchPolicy.update",
            http: Put,
            path: "assets/{assetId}/matchPolicy",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
    },
    AssetRelationships => asset_relationships {
        /// Deletes a relationship between two assets.
        delete => ASSET_RELATIONSHIPS_DELETE {
            id: "youtubePartner.assetRelationships.delete",
            http: Delete,
            path: "assetRelationships/{assetRelationshipId}",
            required: [asset_relationship_id = "assetRelationshipId"],
            path_params: ["assetRelationshipId"],
            upload: None,
        },
        /// Creates a relationship that links two assets.
        insert => ASSET_RELATIONSHIPS_INSERT {
            id: "youtubePartner.assetRelationships.insert",
            http: Post,
            path: "assetRelationships",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Retrieves a list of relationships for a given asset.
        list => ASSET_RELATIONSHIPS_LIST {
            id: "youtubePartner.assetRelationships.list",
            http: Get,
            path: "assetRelationships",
            required: [asset_id = "assetId"],
            path_params: [],
            upload: None,
        },
    },
    AssetSearch => asset_search {
        /// Searches for assets based on asset metadata.
        list => ASSET_SEARCH_LIST {
            id: "youtubePartner.assetSearch.list",
            http: Get,
            path: "assetSearch",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    AssetShares => asset_shares {
        /// This method either retrieves a list of asset shares the partner owns and that map to a specified asset view ID or it retrieves a list of asset views associated with a specified asset share ID owned by the partner.
        list => ASSET_SHARES_LIST {
            id: "youtubePartner.assetShares.list",
            http: Get,
            path: "assetShares",
            required: [asset_id = "assetId"],
            path_params: [],
            upload: None,
        },
    },
    Assets => assets {
        /// Retrieves the metadata for the specified asset.
        get => ASSETS_GET {
            id: "youtubePartner.assets.get",
            http: Get,
            path: "assets/{assetId}",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
        /// Inserts an asset with the specified metadata.
        insert => ASSETS_INSERT {
            id: "youtubePartner.assets.insert",
            http: Post,
            path: "assets",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Retrieves a list of assets based on asset metadata.
        list => ASSETS_LIST {
            id: "youtubePartner.assets.list",
            http: Get,
            path: "assets",
            required: [id = "id"],
            path_params: [],
            upload: None,
        },
        /// Patches the metadata for the specified asset.
        patch => ASSETS_PATCH {
            id: "youtubePartner.assets.patch",
            http: Patch,
            path: "assets/{assetId}",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
        /// Updates the metadata for the specified asset.
        update => ASSETS_UPDATE {
            id: "youtubePartner.assets.update",
            http: Put,
            path: "assets/{assetId}",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
    },
    Campaigns => campaigns {
        /// Deletes a specified campaign for an owner.
        delete => CAMPAIGNS_DELETE {
            id: "youtubePartner.campaigns.delete",
            http: Delete,
            path: "campaigns/{campaignId}",
            required: [campaign_id = "campaignId"],
            path_params: ["campaignId"],
            upload: None,
        },
        /// Retrieves a particular campaign for an owner.
        get => CAMPAIGNS_GET {
            id: "youtubePartner.campaigns.get",
            http: Get,
            path: "campaigns/{campaignId}",
            required: [campaign_id = "campaignId"],
            path_params: ["campaignId"],
            upload: None,
        },
        /// Insert a new campaign for an owner using the specified campaign data.
        insert => CAMPAIGNS_INSERT {
            id: "youtubePartner.campaigns.insert",
            http: Post,
            path: "campaigns",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Retrieves a list of campaigns for an owner.
        list => CAMPAIGNS_LIST {
            id: "youtubePartner.campaigns.list",
            http: Get,
            path: "campaigns",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Update the data for a specific campaign.
        patch => CAMPAIGNS_PATCH {
            id: "youtubePartner.campaigns.patch",
            http: Patch,
            path: "campaigns/{campaignId}",
            required: [campaign_id = "campaignId"],
            path_params: ["campaignId"],
            upload: None,
        },
        /// Update the data for a specific campaign.
        update => CAMPAIGNS_UPDATE {
            id: "youtubePartner.campaigns.update",
            http: Put,
            path: "campaigns/{campaignId}",
            required: [campaign_id = "campaignId"],
            path_params: ["campaignId"],
            upload: None,
        },
    },
    ClaimHistory => claim_history {
        /// Retrieves the claim history for a specified claim.
        get => CLAIM_HISTORY_GET {
            id: "youtubePartner.claimHistory.get",
            http: Get,
            path: "claimHistory/{claimId}",
            required: [claim_id = "claimId"],
            path_params: ["claimId"],
            upload: None,
        },
    },
    ClaimSearch => claim_search {
        /// Retrieves a list of claims that match the search criteria.
        list => CLAIM_SEARCH_LIST {
            id: "youtubePartner.claimSearch.list",
            http: Get,
            path: "claimSearch",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    Claims => claims {
        /// Retrieves a specific claim by ID.
        get => CLAIMS_GET {
            id: "youtubePartner.claims.get",
            http: Get,
            path: "claims/{claimId}",
            required: [claim_id = "claimId"],
            path_params: ["claimId"],
            upload: None,
        },
        /// Creates a claim.
        insert => CLAIMS_INSERT {
            id: "youtubePartner.claims.insert",
            http: Post,
            path: "claims",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Retrieves a list of claims administered by the content owner associated with the currently authenticated user.
        list => CLAIMS_LIST {
            id: "youtubePartner.claims.list",
            http: Get,
            path: "claims",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Updates an existing claim by either changing its policy or its status.
        patch => CLAIMS_PATCH {
            id: "youtubePartner.claims.patch",
            http: Patch,
            path: "claims/{claimId}",
            required: [claim_id = "claimId"],
            path_params: ["claimId"],
            upload: None,
        },
        /// Updates an existing claim by either changing its policy or its status.
        update => CLAIMS_UPDATE {
            id: "youtubePartner.claims.update",
            http: Put,
            path: "claims/{claimId}",
            required: [claim_id = "claimId"],
            path_params: ["claimId"],
            upload: None,
        },
    },
    ContentOwnerAdvertisingOptions => content_owner_advertising_options {
        /// Retrieves advertising options for the content owner associated with the authenticated user.
        get => CONTENT_OWNER_ADVERTISING_OPTIONS_GET {
            id: "youtubePartner.contentOwnerAdvertisingOptions.get",
            http: Get,
            path: "contentOwnerAdvertisingOptions",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Updates advertising options for the content owner associated with the authenticated API user.
        patch => CONTENT_OWNER_ADVERTISING_OPTIONS_PATCH {
            id: "youtubePartner.contentOwnerAdvertisingOptions.patch",
            http: Patch,
            path: "contentOwnerAdvertisingOptions",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Updates advertising options for the content owner associated with the authenticated API user.
        update => CONTENT_OWNER_ADVERTISING_OPTIONS_UPDATE {
            id: "youtubePartner.contentOwnerAdvertisingOptions.update",
            http: Put,
            path: "contentOwnerAdvertisingOptions",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    ContentOwners => content_owners {
        /// Retrieves information about the specified content owner.
        get => CONTENT_OWNERS_GET {
            id: "youtubePartner.contentOwners.get",
            http: Get,
            path: "contentOwners/{contentOwnerId}",
            required: [content_owner_id = "contentOwnerId"],
            path_params: ["contentOwnerId"],
            upload: None,
        },
        /// Retrieves a list of content owners that match the request criteria.
        list => CONTENT_OWNERS_LIST {
            id: "youtubePartner.contentOwners.list",
            http: Get,
            path: "contentOwners",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    LiveCuepoints => live_cuepoints {
        /// Inserts a cuepoint into a live broadcast.
        insert => LIVE_CUEPOINTS_INSERT {
            id: "youtubePartner.liveCuepoints.insert",
            http: Post,
            path: "liveCuepoints",
            required: [channel_id = "channelId"],
            path_params: [],
            upload: None,
        },
    },
    MetadataHistory => metadata_history {
        /// Retrieves a list of all metadata provided for an asset, regardless of which content owner provided the data.
        list => METADATA_HISTORY_LIST {
            id: "youtubePartner.metadataHistory.list",
            http: Get,
            path: "metadataHistory",
            required: [asset_id = "assetId"],
            path_params: [],
            upload: None,
        },
    },
    Orders => orders {
        /// Delete an order, which moves orders to inactive state and removes any associated video.
        delete => ORDERS_DELETE {
            id: "youtubePartner.orders.delete",
            http: Delete,
            path: "orders/{orderId}",
            required: [order_id = "orderId"],
            path_params: ["orderId"],
            upload: None,
        },
        /// Retrieve the details of an existing order.
        get => ORDERS_GET {
            id: "youtubePartner.orders.get",
            http: Get,
            path: "orders/{orderId}",
            required: [order_id = "orderId"],
            path_params: ["orderId"],
            upload: None,
        },
        /// Creates a new basic order entry in the YouTube premium asset order management system.
        insert => ORDERS_INSERT {
            id: "youtubePartner.orders.insert",
            http: Post,
            path: "orders",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Return a list of orders, filtered by the parameters below, may return more than a single page of results.
        list => ORDERS_LIST {
            id: "youtubePartner.orders.list",
            http: Get,
            path: "orders",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Update the values in an existing order.
        patch => ORDERS_PATCH {
            id: "youtubePartner.orders.patch",
            http: Patch,
            path: "orders/{orderId}",
            required: [order_id = "orderId"],
            path_params: ["orderId"],
            upload: None,
        },
        /// Update the values in an existing order.
        update => ORDERS_UPDATE {
            id: "youtubePartner.orders.update",
            http: Put,
            path: "orders/{orderId}",
            required: [order_id = "orderId"],
            path_params: ["orderId"],
            upload: None,
        },
    },
    Ownership => ownership {
        /// Retrieves the ownership data provided for the specified asset by the content owner associated with the authenticated user.
        get => OWNERSHIP_GET {
            id: "youtubePartner.ownership.get",
            http: Get,
            path: "assets/{assetId}/ownership",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
        /// Provides new ownership information for the specified asset.
        patch => OWNERSHIP_PATCH {
            id: "youtubePartner.ownership.patch",
            http: Patch,
            path: "assets/{assetId}/ownership",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
        /// Provides new ownership information for the specified asset.
        update => OWNERSHIP_UPDATE {
            id: "youtubePartner.ownership.update",
            http: Put,
            path: "assets/{assetId}/ownership",
            required: [asset_id = "assetId"],
            path_params: ["assetId"],
            upload: None,
        },
    },
    OwnershipHistory => ownership_history {
        /// Retrieves a list of the ownership data for an asset, regardless of which content owner provided the data.
        list => OWNERSHIP_HISTORY_LIST {
            id: "youtubePartner.ownershipHistory.list",
            http: Get,
            path: "ownershipHistory",
            required: [asset_id = "assetId"],
            path_params: [],
            upload: None,
        },
    },
    Package => package {
        /// Retrieves information for the specified package.
        get => PACKAGE_GET {
            id: "youtubePartner.package.get",
            http: Get,
            path: "package/{packageId}",
            required: [package_id = "packageId"],
            path_params: ["packageId"],
            upload: None,
        },
        /// Inserts a metadata-only package.
        insert => PACKAGE_INSERT {
            id: "youtubePartner.package.insert",
            http: Post,
            path: "package",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    Policies => policies {
        /// Retrieves the specified saved policy.
        get => POLICIES_GET {
            id: "youtubePartner.policies.get",
            http: Get,
            path: "policies/{policyId}",
            required: [policy_id = "policyId"],
            path_params: ["policyId"],
            upload: None,
        },
        /// Creates a saved policy.
        insert => POLICIES_INSERT {
            id: "youtubePartner.policies.insert",
            http: Post,
            path: "policies",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Retrieves a list of the content owner's saved policies.
        list => POLICIES_LIST {
            id: "youtubePartner.policies.list",
            http: Get,
            path: "policies",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Updates the specified saved policy.
        patch => POLICIES_PATCH {
            id: "youtubePartner.policies.patch",
            http: Patch,
            path: "policies/{policyId}",
            required: [policy_id = "policyId"],
            path_params: ["policyId"],
            upload: None,
        },
        /// Updates the specified saved policy.
        update => POLICIES_UPDATE {
            id: "youtubePartner.policies.update",
            http: Put,
            path: "policies/{policyId}",
            required: [policy_id = "policyId"],
            path_params: ["policyId"],
            upload: None,
        },
    },
    ReferenceConflicts => reference_conflicts {
        /// Retrieves information about the specified reference conflict.
        get => REFERENCE_CONFLICTS_GET {
            id: "youtubePartner.referenceConflicts.get",
            http: Get,
            path: "referenceConflicts/{referenceConflictId}",
            required: [reference_conflict_id = "referenceConflictId"],
            path_params: ["referenceConflictId"],
            upload: None,
        },
        /// Retrieves a list of unresolved reference conflicts.
        list => REFERENCE_CONFLICTS_LIST {
            id: "youtubePartner.referenceConflicts.list",
            http: Get,
            path: "referenceConflicts",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    References => references {
        /// Retrieves information about the specified reference.
        get => REFERENCES_GET {
            id: "youtubePartner.references.get",
            http: Get,
            path: "references/{referenceId}",
            required: [reference_id = "referenceId"],
            path_params: ["referenceId"],
            upload: None,
        },
        /// Creates a reference, either from an uploaded reference file or from an existing claimed video.
        insert => REFERENCES_INSERT {
            id: "youtubePartner.references.insert",
            http: Post,
            path: "references",
            required: [],
            path_params: [],
            upload: Some("references"),
        },
        /// Retrieves a list of references by ID or the list of references for the specified asset.
        list => REFERENCES_LIST {
            id: "youtubePartner.references.list",
            http: Get,
            path: "references",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Updates a reference.
        patch => REFERENCES_PATCH {
            id: "youtubePartner.references.patch",
            http: Patch,
            path: "references/{referenceId}",
            required: [reference_id = "referenceId"],
            path_params: ["referenceId"],
            upload: None,
        },
        /// Updates a reference.
        update => REFERENCES_UPDATE {
            id: "youtubePartner.references.update",
            http: Put,
            path: "references/{referenceId}",
            required: [reference_id = "referenceId"],
            path_params: ["referenceId"],
            upload: None,
        },
    },
    SpreadsheetTemplate => spreadsheet_template {
        /// Retrieves a list of spreadsheet templates for a content owner.
        list => SPREADSHEET_TEMPLATE_LIST {
            id: "youtubePartner.spreadsheetTemplate.list",
            http: Get,
            path: "spreadsheetTemplate",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    Uploader => uploader {
        /// Retrieves a list of uploaders for a content owner.
        list => UPLOADER_LIST {
            id: "youtubePartner.uploader.list",
            http: Get,
            path: "uploader",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    Validator => validator {
        /// Validate a metadata file.
        validate => VALIDATOR_VALIDATE {
            id: "youtubePartner.validator.validate",
            http: Post,
            path: "validator",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Validate a metadata file asynchronously.
        validate_async => VALIDATOR_VALIDATE_ASYNC {
            id: "youtubePartner.validator.validateAsync",
            http: Post,
            path: "validatorAsync",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Get the asynchronous validation status.
        validate_async_status => VALIDATOR_VALIDATE_ASYNC_STATUS {
            id: "youtubePartner.validator.validateAsyncStatus",
            http: Post,
            path: "validatorAsyncStatus",
            required: [],
            path_params: [],
            upload: None,
        },
    },
    VideoAdvertisingOptions => video_advertising_options {
        /// Retrieves advertising settings for the specified video.
        get => VIDEO_ADVERTISING_OPTIONS_GET {
            id: "youtubePartner.videoAdvertisingOptions.get",
            http: Get,
            path: "videoAdvertisingOptions/{videoId}",
            required: [video_id = "videoId"],
            path_params: ["videoId"],
            upload: None,
        },
        /// Retrieves details about the types of allowed ads for a specified partner- or user-uploaded video.
        get_enabled_ads => VIDEO_ADVERTISING_OPTIONS_GET_ENABLED_ADS {
            id: "youtubePartner.videoAdvertisingOptions.getEnabledAds",
            http: Get,
            path: "videoAdvertisingOptions/{videoId}/getEnabledAds",
            required: [video_id = "videoId"],
            path_params: ["videoId"],
            upload: None,
        },
        /// Updates the advertising settings for the specified video.
        patch => VIDEO_ADVERTISING_OPTIONS_PATCH {
            id: "youtubePartner.videoAdvertisingOptions.patch",
            http: Patch,
            path: "videoAdvertisingOptions/{videoId}",
            required: [video_id = "videoId"],
            path_params: ["videoId"],
            upload: None,
        },
        /// Updates the advertising settings for the specified video.
        update => VIDEO_ADVERTISING_OPTIONS_UPDATE {
            id: "youtubePartner.videoAdvertisingOptions.update",
            http: Put,
            path: "videoAdvertisingOptions/{videoId}",
            required: [video_id = "videoId"],
            path_params: ["videoId"],
            upload: None,
        },
    },
    Whitelists => whitelists {
        /// Removes a whitelisted channel for a content owner.
        delete => WHITELISTS_DELETE {
            id: "youtubePartner.whitelists.delete",
            http: Delete,
            path: "whitelists/{id}",
            required: [id = "id"],
            path_params: ["id"],
            upload: None,
        },
        /// Retrieves a specific whitelisted channel by ID.
        get => WHITELISTS_GET {
            id: "youtubePartner.whitelists.get",
            http: Get,
            path: "whitelists/{id}",
            required: [id = "id"],
            path_params: ["id"],
            upload: None,
        },
        /// Whitelist a YouTube channel for your content owner.
        insert => WHITELISTS_INSERT {
            id: "youtubePartner.whitelists.insert",
            http: Post,
            path: "whitelists",
            required: [],
            path_params: [],
            upload: None,
        },
        /// Retrieves a list of whitelisted channels for a content owner.
        list => WHITELISTS_LIST {
            id: "youtubePartner.whitelists.list",
            http: Get,
            path: "whitelists",
            required: [],
            path_params: [],
            upload: None,
        },
    },
}
