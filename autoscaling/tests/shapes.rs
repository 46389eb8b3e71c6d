/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use autoscaling::input::CreateLaunchConfigurationInput;
use autoscaling::model::{BlockDeviceMapping, Ebs, InstanceMonitoring};
use autoscaling::AutoConstructList;
use proptest::prelude::*;
use smithy_types::test_util::{auto_construct_list, optional_bool, optional_i32, optional_list, optional_string};
use smithy_types::ShapeHash;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn rebuild_mapping(mapping: &BlockDeviceMapping) -> BlockDeviceMapping {
    BlockDeviceMapping::builder()
        .set_virtual_name(mapping.virtual_name().map(str::to_string))
        .set_device_name(mapping.device_name().map(str::to_string))
        .set_ebs(mapping.ebs().map(|ebs| {
            Ebs::builder()
                .set_snapshot_id(ebs.snapshot_id().map(str::to_string))
                .set_volume_size(ebs.volume_size())
                .set_volume_type(ebs.volume_type().map(str::to_string))
                .set_delete_on_termination(ebs.delete_on_termination())
                .set_iops(ebs.iops())
                .build()
        }))
        .set_no_device(mapping.no_device())
        .build()
}

// List items are appended one at a time; explicitly empty lists stay explicit.
fn rebuild(input: &CreateLaunchConfigurationInput) -> CreateLaunchConfigurationInput {
    let mut builder = CreateLaunchConfigurationInput::builder()
        .set_launch_configuration_name(input.launch_configuration_name().map(str::to_string))
        .set_image_id(input.image_id().map(str::to_string))
        .set_key_name(input.key_name().map(str::to_string))
        .set_classic_link_vpc_id(input.classic_link_vpc_id().map(str::to_string))
        .set_user_data(input.user_data().map(str::to_string))
        .set_instance_id(input.instance_id().map(str::to_string))
        .set_instance_type(input.instance_type().map(str::to_string))
        .set_kernel_id(input.kernel_id().map(str::to_string))
        .set_ramdisk_id(input.ramdisk_id().map(str::to_string))
        .set_instance_monitoring(
            input
                .instance_monitoring()
                .map(|m| InstanceMonitoring::builder().set_enabled(m.enabled()).build()),
        )
        .set_spot_price(input.spot_price().map(str::to_string))
        .set_iam_instance_profile(input.iam_instance_profile().map(str::to_string))
        .set_ebs_optimized(input.ebs_optimized())
        .set_associate_public_ip_address(input.associate_public_ip_address())
        .set_placement_tenancy(input.placement_tenancy().map(str::to_string));
    if !input.security_groups.is_auto_construct() {
        builder = builder.set_security_groups(Some(vec![]));
    }
    for group in input.security_groups() {
        builder = builder.security_groups(group.as_str());
    }
    if !input.classic_link_vpc_security_groups.is_auto_construct() {
        builder = builder.set_classic_link_vpc_security_groups(Some(vec![]));
    }
    for group in input.classic_link_vpc_security_groups() {
        builder = builder.classic_link_vpc_security_groups(group.as_str());
    }
    if !input.block_device_mappings.is_auto_construct() {
        builder = builder.set_block_device_mappings(Some(vec![]));
    }
    for mapping in input.block_device_mappings() {
        builder = builder.block_device_mappings(rebuild_mapping(mapping));
    }
    builder.build()
}

prop_compose! {
    fn ebs()(
        snapshot_id in optional_string(),
        volume_size in optional_i32(),
        volume_type in optional_string(),
        delete_on_termination in optional_bool(),
        iops in optional_i32()
    ) -> Ebs {
        Ebs::builder()
            .set_snapshot_id(snapshot_id)
            .set_volume_size(volume_size)
            .set_volume_type(volume_type)
            .set_delete_on_termination(delete_on_termination)
            .set_iops(iops)
            .build()
    }
}

prop_compose! {
    fn block_device_mapping()(
        virtual_name in optional_string(),
        device_name in optional_string(),
        ebs in proptest::option::of(ebs()),
        no_device in optional_bool()
    ) -> BlockDeviceMapping {
        BlockDeviceMapping::builder()
            .set_virtual_name(virtual_name)
            .set_device_name(device_name)
            .set_ebs(ebs)
            .set_no_device(no_device)
            .build()
    }
}

prop_compose! {
    fn launch_configuration()(
        names in (optional_string(), optional_string(), optional_string()),
        security_groups in optional_list("sg-[0-9a-f]{8}"),
        classic_link_vpc_id in optional_string(),
        classic_link_vpc_security_groups in optional_list("sg-[0-9a-f]{8}"),
        instance in (optional_string(), optional_string(), optional_string(), optional_string(), optional_string()),
        block_device_mappings in optional_list(block_device_mapping()),
        monitoring in optional_bool(),
        pricing in (optional_string(), optional_string(), optional_string()),
        flags in (optional_bool(), optional_bool())
    ) -> CreateLaunchConfigurationInput {
        CreateLaunchConfigurationInput::builder()
            .set_launch_configuration_name(names.0)
            .set_image_id(names.1)
            .set_key_name(names.2)
            .set_security_groups(security_groups)
            .set_classic_link_vpc_id(classic_link_vpc_id)
            .set_classic_link_vpc_security_groups(classic_link_vpc_security_groups)
            .set_user_data(instance.0)
            .set_instance_id(instance.1)
            .set_instance_type(instance.2)
            .set_kernel_id(instance.3)
            .set_ramdisk_id(instance.4)
            .set_block_device_mappings(block_device_mappings)
            .set_instance_monitoring(monitoring.map(|enabled| InstanceMonitoring::builder().enabled(enabled).build()))
            .set_spot_price(pricing.0)
            .set_iam_instance_profile(pricing.1)
            .set_ebs_optimized(flags.0)
            .set_associate_public_ip_address(flags.1)
            .set_placement_tenancy(pricing.2)
            .build()
    }
}

proptest! {
    #[test]
    fn clone_equals_original(input in launch_configuration()) {
        let copy = input.clone();
        prop_assert_eq!(&copy, &input);
        prop_assert_eq!(copy.shape_hash(), input.shape_hash());
        prop_assert_eq!(
            copy.security_groups.is_auto_construct(),
            input.security_groups.is_auto_construct()
        );
        prop_assert_eq!(copy.to_string(), input.to_string());
    }

    #[test]
    fn independently_built_inputs_are_equal(input in launch_configuration()) {
        let rebuilt = rebuild(&input);
        prop_assert_eq!(&rebuilt, &input);
        prop_assert_eq!(rebuilt.shape_hash(), input.shape_hash());
        prop_assert_eq!(std_hash(&rebuilt), std_hash(&input));
        prop_assert_eq!(rebuilt.to_string(), input.to_string());
    }

    #[test]
    fn unset_lists_never_render(input in launch_configuration()) {
        let display = input.to_string();
        prop_assert_eq!(
            display.contains("SecurityGroups: ["),
            !input.security_groups.is_auto_construct()
                || !input.classic_link_vpc_security_groups.is_auto_construct()
        );
        prop_assert_eq!(
            display.contains("BlockDeviceMappings: "),
            !input.block_device_mappings.is_auto_construct()
        );
    }

    #[test]
    fn emptied_list_equals_auto_constructed(groups in auto_construct_list("sg-[0-9a-f]{8}")) {
        let mut input = CreateLaunchConfigurationInput::builder().build();
        input.security_groups = groups;
        let reset = input.security_groups.is_empty();
        prop_assert_eq!(reset, input == CreateLaunchConfigurationInput::default());
        if reset {
            prop_assert_eq!(input.shape_hash(), CreateLaunchConfigurationInput::default().shape_hash());
        }
    }
}

#[test]
fn full_request_listing() {
    let input = CreateLaunchConfigurationInput::builder()
        .launch_configuration_name("web-lc")
        .image_id("ami-12345678")
        .security_groups("sg-1")
        .instance_type("t2.micro")
        .block_device_mappings(
            BlockDeviceMapping::builder()
                .device_name("/dev/xvda")
                .ebs(Ebs::builder().volume_size(8).build())
                .build(),
        )
        .instance_monitoring(InstanceMonitoring::builder().enabled(false).build())
        .ebs_optimized(true)
        .build();
    assert_eq!(
        input.to_string(),
        "{LaunchConfigurationName: web-lc,ImageId: ami-12345678,SecurityGroups: [sg-1],\
         InstanceType: t2.micro,BlockDeviceMappings: [{DeviceName: /dev/xvda,Ebs: {VolumeSize: 8}}],\
         InstanceMonitoring: {Enabled: false},EbsOptimized: true}"
    );
}

#[test]
fn lists_can_be_extended_on_the_shape() {
    let mut input = CreateLaunchConfigurationInput::builder().build();
    input
        .classic_link_vpc_security_groups
        .extend(vec!["sg-a".to_string(), "sg-b".to_string()]);
    assert_eq!(input.classic_link_vpc_security_groups(), &["sg-a", "sg-b"]);
    input.classic_link_vpc_security_groups = AutoConstructList::new();
    assert!(input.classic_link_vpc_security_groups.as_option().is_none());
}
